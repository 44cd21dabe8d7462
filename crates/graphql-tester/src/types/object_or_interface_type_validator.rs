use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeData;
use std::collections::HashMap;

pub(super) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a ObjectOrInterfaceTypeData,
    types_map: &'a HashMap<String, GraphQLType>,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_: &'a ObjectOrInterfaceTypeData,
        types_map: &'a HashMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        self.validate_interfaces();
        self.validate_fields();
        self.errors
    }

    fn validate_fields(&mut self) {
        let type_name = self.type_.name.as_str();
        for (field_name, field) in &self.type_.fields {
            // All fields on an object or interface type must be declared with
            // an output type.
            //
            // https://spec.graphql.org/October2021/#sel-JAHZhCFDBFABLBgB_pM
            let field_annot = field.type_annotation();
            let innermost_type_name =
                field_annot.innermost_named_type_annotation()
                    .graphql_type_name();
            match self.types_map.get(innermost_type_name) {
                Some(GraphQLType::InputObject(_)) => self.errors.push(
                    TypeValidationError::InvalidOutputFieldWithInputType {
                        def_location: field_annot.ref_location().to_owned(),
                        field_name: field_name.to_string(),
                        input_type_name: innermost_type_name.to_string(),
                        parent_type_name: type_name.to_string(),
                    }
                ),
                Some(_) => (),
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: field_annot.ref_location().to_owned(),
                    undefined_type_name: innermost_type_name.to_string(),
                }),
            }

            for (param_name, param) in field.parameters() {
                // https://spec.graphql.org/October2021/#sel-KAHZhCFDBHBDCAACEB6yD
                let param_annot = param.type_annotation();
                let innermost_type_name =
                    param_annot.innermost_named_type_annotation()
                        .graphql_type_name();
                match self.types_map.get(innermost_type_name) {
                    Some(innermost_type) if !innermost_type.is_input_type() =>
                        self.errors.push(
                            TypeValidationError::InvalidParameterWithOutputType {
                                def_location: param_annot.ref_location().to_owned(),
                                field_name: field_name.to_string(),
                                output_type_name: innermost_type_name.to_string(),
                                parameter_name: param_name.to_string(),
                                parent_type_name: type_name.to_string(),
                            }
                        ),
                    Some(_) => (),
                    None => self.errors.push(TypeValidationError::UndefinedTypeName {
                        ref_location: param_annot.ref_location().to_owned(),
                        undefined_type_name: innermost_type_name.to_string(),
                    }),
                }
            }
        }
    }

    fn validate_interfaces(&mut self) {
        let type_name = self.type_.name.as_str();
        for iface_ref in &self.type_.interfaces {
            let iface = match self.types_map.get(iface_ref.name()) {
                Some(GraphQLType::Interface(iface)) => iface,
                Some(non_iface_type) => {
                    self.errors.push(
                        TypeValidationError::ImplementsNonInterfaceType {
                            def_location: iface_ref.ref_location().to_owned(),
                            non_interface_type_name: non_iface_type.name().to_string(),
                            type_name: type_name.to_string(),
                        }
                    );
                    continue;
                },
                None => {
                    self.errors.push(TypeValidationError::UndefinedTypeName {
                        ref_location: iface_ref.ref_location().to_owned(),
                        undefined_type_name: iface_ref.name().to_string(),
                    });
                    continue;
                },
            };

            // Every field the interface declares must also be declared by the
            // implementing type.
            //
            // https://spec.graphql.org/October2021/#IsValidImplementation()
            for iface_field_name in iface.fields().keys() {
                if !self.type_.fields.contains_key(iface_field_name) {
                    self.errors.push(
                        TypeValidationError::MissingInterfaceField {
                            def_location: self.type_.def_location.to_owned(),
                            field_name: iface_field_name.to_string(),
                            interface_name: iface.name().to_string(),
                            type_name: type_name.to_string(),
                        }
                    );
                }
            }
        }
    }
}
