use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputObjectTypeValidator;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeBuilderHelpers;
use crate::types::UnionType;
use crate::types::UnionTypeValidator;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Accumulates the named types of a schema while its documents are visited,
/// then validates them all together.
#[derive(Debug)]
pub(crate) struct TypesMapBuilder {
    pub(super) types: HashMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        Self {
            types: HashMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: &loc::SchemaDefLocation,
        type_: GraphQLType,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_loc.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location(),
                def2: type_loc.to_owned(),
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    pub fn get_type_mut(
        &mut self,
        type_name: &str,
    ) -> Option<&mut GraphQLType> {
        self.types.get_mut(type_name)
    }

    /// Finish building: give every object and interface type its implicit
    /// `__typename` field, then validate all types together.
    pub fn into_types_map(mut self) -> Result<HashMap<String, GraphQLType>> {
        for type_ in self.types.values_mut() {
            let type_data = match type_ {
                GraphQLType::Interface(iface_type) => &mut iface_type.0,
                GraphQLType::Object(obj_type) => &mut obj_type.0,
                _ => continue,
            };
            let typename_field = TypeBuilderHelpers::typename_field(&type_data.name);
            type_data.fields.insert("__typename".to_string(), typename_field);
        }

        let mut errors = vec![];
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                    => (),

                GraphQLType::InputObject(type_) => errors.append(
                    &mut InputObjectTypeValidator::new(type_, &self.types)
                        .validate()
                ),

                GraphQLType::Interface(type_) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(&type_.0, &self.types)
                        .validate()
                ),

                GraphQLType::Object(type_) => errors.append(
                    &mut ObjectOrInterfaceTypeValidator::new(&type_.0, &self.types)
                        .validate()
                ),

                GraphQLType::Union(type_) => errors.append(
                    &mut UnionTypeValidator::new(type_, &self.types)
                        .validate()
                ),
            }
        }

        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        Ok(self.types)
    }

    pub fn merge_type_extension(
        &mut self,
        file_path: &Path,
        ext: &ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let (ext_name, ext_position) = match ext {
            TypeExtension::Enum(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::InputObject(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Interface(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Object(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Scalar(ext) => (ext.name.as_str(), ext.position),
            TypeExtension::Union(ext) => (ext.name.as_str(), ext.position),
        };
        let ext_loc: loc::SchemaDefLocation =
            loc::FilePosition::from_pos(file_path, ext_position).into();

        let Some(type_) = self.types.get_mut(ext_name) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name: ext_name.to_string(),
                extension_type_loc: ext_loc,
            });
        };

        match (type_, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) =>
                TypeBuilderHelpers::enum_values_from_ast(
                    file_path,
                    ext_name,
                    &enum_type.def_location.to_owned(),
                    &ext.values,
                    &mut enum_type.values,
                ),

            (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(ext)) =>
                TypeBuilderHelpers::input_fields_from_ast(
                    file_path,
                    ext_name,
                    &ext.fields,
                    &mut inputobj_type.fields,
                ),

            (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) => {
                TypeBuilderHelpers::interface_refs_from_ast(
                    &ext_loc,
                    ext_name,
                    &ext.implements_interfaces,
                    &mut iface_type.0.interfaces,
                )?;
                TypeBuilderHelpers::object_fields_from_ast(
                    file_path,
                    ext_name,
                    &ext.fields,
                    &mut iface_type.0.fields,
                )
            },

            (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) => {
                TypeBuilderHelpers::interface_refs_from_ast(
                    &ext_loc,
                    ext_name,
                    &ext.implements_interfaces,
                    &mut obj_type.0.interfaces,
                )?;
                TypeBuilderHelpers::object_fields_from_ast(
                    file_path,
                    ext_name,
                    &ext.fields,
                    &mut obj_type.0.fields,
                )
            },

            // Scalar extensions only add directives, which are ignored.
            (GraphQLType::Scalar(_), TypeExtension::Scalar(_)) => Ok(()),

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) =>
                TypeBuilderHelpers::union_members_from_ast(
                    &ext_loc,
                    ext_name,
                    &ext.types,
                    &mut union_type.members,
                ),

            (schema_type, _) => Err(SchemaBuildError::InvalidExtensionType {
                schema_type: schema_type.to_owned(),
                extension_loc: ext_loc,
            }),
        }
    }

    pub fn visit_type_def(
        &mut self,
        file_path: &Path,
        def: &ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;

        match def {
            TypeDefinition::Enum(def) => {
                let def_location: loc::SchemaDefLocation =
                    loc::FilePosition::from_pos(file_path, def.position).into();
                if def.values.is_empty() {
                    return Err(SchemaBuildError::EnumWithNoVariants {
                        type_name: def.name.to_string(),
                        location: def_location,
                    });
                }
                let mut values = IndexMap::new();
                TypeBuilderHelpers::enum_values_from_ast(
                    file_path,
                    def.name.as_str(),
                    &def_location,
                    &def.values,
                    &mut values,
                )?;
                self.add_new_type(
                    def.name.as_str(),
                    &def_location,
                    GraphQLType::Enum(Box::new(EnumType {
                        def_location: def_location.to_owned(),
                        description: def.description.to_owned(),
                        name: def.name.to_string(),
                        values,
                    })),
                )
            },

            TypeDefinition::InputObject(def) => {
                let def_location: loc::SchemaDefLocation =
                    loc::FilePosition::from_pos(file_path, def.position).into();
                let mut fields = IndexMap::new();
                TypeBuilderHelpers::input_fields_from_ast(
                    file_path,
                    def.name.as_str(),
                    &def.fields,
                    &mut fields,
                )?;
                self.add_new_type(
                    def.name.as_str(),
                    &def_location,
                    GraphQLType::InputObject(Box::new(InputObjectType {
                        def_location: def_location.to_owned(),
                        description: def.description.to_owned(),
                        fields,
                        name: def.name.to_string(),
                    })),
                )
            },

            TypeDefinition::Interface(def) => {
                let type_data = Self::object_or_interface_type_data(
                    file_path,
                    def.position,
                    def.name.as_str(),
                    &def.description,
                    &def.fields,
                    &def.implements_interfaces,
                )?;
                let def_location = type_data.def_location.to_owned();
                self.add_new_type(
                    def.name.as_str(),
                    &def_location,
                    GraphQLType::Interface(Box::new(InterfaceType(type_data))),
                )
            },

            TypeDefinition::Object(def) => {
                let type_data = Self::object_or_interface_type_data(
                    file_path,
                    def.position,
                    def.name.as_str(),
                    &def.description,
                    &def.fields,
                    &def.implements_interfaces,
                )?;
                let def_location = type_data.def_location.to_owned();
                self.add_new_type(
                    def.name.as_str(),
                    &def_location,
                    GraphQLType::Object(Box::new(ObjectType(type_data))),
                )
            },

            TypeDefinition::Scalar(def) => {
                let def_location: loc::SchemaDefLocation =
                    loc::FilePosition::from_pos(file_path, def.position).into();
                self.add_new_type(
                    def.name.as_str(),
                    &def_location,
                    GraphQLType::Scalar(Box::new(ScalarType {
                        def_location: def_location.to_owned(),
                        description: def.description.to_owned(),
                        name: def.name.to_string(),
                    })),
                )
            },

            TypeDefinition::Union(def) => {
                let def_location: loc::SchemaDefLocation =
                    loc::FilePosition::from_pos(file_path, def.position).into();
                let mut members = IndexMap::new();
                TypeBuilderHelpers::union_members_from_ast(
                    &def_location,
                    def.name.as_str(),
                    &def.types,
                    &mut members,
                )?;
                self.add_new_type(
                    def.name.as_str(),
                    &def_location,
                    GraphQLType::Union(Box::new(UnionType {
                        def_location: def_location.to_owned(),
                        description: def.description.to_owned(),
                        members,
                        name: def.name.to_string(),
                    })),
                )
            },
        }
    }

    fn object_or_interface_type_data(
        file_path: &Path,
        position: ast::AstPos,
        type_name: &str,
        description: &Option<String>,
        ast_fields: &[ast::schema::Field],
        ast_iface_names: &[String],
    ) -> Result<ObjectOrInterfaceTypeData> {
        let def_location: loc::SchemaDefLocation =
            loc::FilePosition::from_pos(file_path, position).into();

        let mut fields = IndexMap::new();
        TypeBuilderHelpers::object_fields_from_ast(
            file_path,
            type_name,
            ast_fields,
            &mut fields,
        )?;

        let mut interfaces = vec![];
        TypeBuilderHelpers::interface_refs_from_ast(
            &def_location,
            type_name,
            ast_iface_names,
            &mut interfaces,
        )?;

        Ok(ObjectOrInterfaceTypeData {
            def_location,
            description: description.to_owned(),
            fields,
            interfaces,
            name: type_name.to_string(),
        })
    }
}
