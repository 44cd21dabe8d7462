use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;

pub(super) struct InputObjectTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a InputObjectType,
    types_map: &'a HashMap<String, GraphQLType>,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(
        type_: &'a InputObjectType,
        types_map: &'a HashMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        self.validate_field_types();
        self.find_unbroken_cycles(
            self.type_.name(),
            self.type_.fields(),
            &mut vec![],
            HashSet::from([self.type_.name()]),
        );
        self.errors
    }

    fn validate_field_types(&mut self) {
        for (field_name, field) in self.type_.fields() {
            let field_annot = field.type_annotation();
            let innermost_type_name =
                field_annot.innermost_named_type_annotation()
                    .graphql_type_name();

            // Input object fields can not be declared with an output type.
            //
            // https://spec.graphql.org/October2021/#sel-IAHhBXDDBFCAACEB4iG
            match self.types_map.get(innermost_type_name) {
                Some(innermost_type) if !innermost_type.is_input_type() =>
                    self.errors.push(
                        TypeValidationError::InvalidInputFieldWithOutputType {
                            def_location: field_annot.ref_location().to_owned(),
                            field_name: field_name.to_string(),
                            invalid_type_name: innermost_type_name.to_string(),
                            parent_type_name: self.type_.name().to_string(),
                        }
                    ),
                Some(_) => (),
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: field_annot.ref_location().to_owned(),
                    undefined_type_name: innermost_type_name.to_string(),
                }),
            }
        }
    }

    /// Looks for chains of input-object fields that lead back to this type
    /// without passing through at least one nullable link. No finite value can
    /// satisfy such a chain.
    fn find_unbroken_cycles(
        &mut self,
        type_name: &'a str,
        fields: &'a IndexMap<String, InputField>,
        path: &mut Vec<(&'a str, Option<&'a str>)>,
        seen_type_names: HashSet<&'a str>,
    ) {
        for (field_name, field) in fields {
            if annot_contains_cycle_breaking_nullable_type(field.type_annotation()) {
                continue;
            }

            let innermost_type_name =
                field.type_annotation()
                    .innermost_named_type_annotation()
                    .graphql_type_name();
            let Some(GraphQLType::InputObject(input_obj_type)) =
                self.types_map.get(innermost_type_name) else {
                continue;
            };

            path.push((type_name, Some(field_name)));
            path.push((innermost_type_name, None));
            if innermost_type_name == self.type_.name() {
                self.errors.push(TypeValidationError::CircularInputFieldChain {
                    circular_field_path: path.iter().map(|(type_name, field_name)| {
                        if let Some(field_name) = field_name {
                            format!("{type_name}.{field_name}")
                        } else {
                            type_name.to_string()
                        }
                    }).collect(),
                });
            } else if !seen_type_names.contains(innermost_type_name) {
                let mut seen_type_names = seen_type_names.clone();
                seen_type_names.insert(innermost_type_name);
                self.find_unbroken_cycles(
                    innermost_type_name,
                    input_obj_type.fields(),
                    path,
                    seen_type_names,
                );
            }
            path.truncate(path.len() - 2);
        }
    }
}

fn annot_contains_cycle_breaking_nullable_type(
    type_annot: &TypeAnnotation,
) -> bool {
    match type_annot {
        TypeAnnotation::List(list_annot) =>
            list_annot.nullable() || annot_contains_cycle_breaking_nullable_type(
                list_annot.inner_type_annotation()
            ),
        TypeAnnotation::Named(named_annot) =>
            named_annot.nullable(),
    }
}
