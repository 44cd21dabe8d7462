use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputField;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Conversions from schema AST nodes into type-graph members.
///
/// Each helper appends into an existing collection so that the same code path
/// serves both a type's definition and any later extensions of it.
pub(crate) struct TypeBuilderHelpers;
impl TypeBuilderHelpers {
    pub fn enum_values_from_ast(
        file_path: &Path,
        enum_name: &str,
        enum_def_location: &loc::SchemaDefLocation,
        ast_values: &[ast::schema::EnumValue],
        values: &mut IndexMap<String, EnumValue>,
    ) -> Result<()> {
        for ast_value in ast_values {
            let value_def_location: loc::SchemaDefLocation =
                loc::FilePosition::from_pos(file_path, ast_value.position).into();

            if let Some(existing_value) = values.get(ast_value.name.as_str()) {
                return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                    enum_name: enum_name.to_string(),
                    enum_def_location: enum_def_location.to_owned(),
                    value_def1: existing_value.def_location.to_owned(),
                    value_def2: value_def_location,
                    value_name: ast_value.name.to_string(),
                });
            }

            values.insert(ast_value.name.to_string(), EnumValue {
                def_location: value_def_location,
                description: ast_value.description.to_owned(),
                name: ast_value.name.to_string(),
            });
        }
        Ok(())
    }

    pub fn input_fields_from_ast(
        file_path: &Path,
        type_name: &str,
        ast_fields: &[ast::schema::InputValue],
        fields: &mut IndexMap<String, InputField>,
    ) -> Result<()> {
        for ast_field in ast_fields {
            let field = InputField::from_ast(file_path, type_name, ast_field);

            if ast_field.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    def_location: field.def_location,
                    field_name: ast_field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            if let Some(existing_field) = fields.get(ast_field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: ast_field.name.to_string(),
                    field_def1: existing_field.def_location.to_owned(),
                    field_def2: field.def_location,
                });
            }

            fields.insert(ast_field.name.to_string(), field);
        }
        Ok(())
    }

    pub fn interface_refs_from_ast(
        type_def_location: &loc::SchemaDefLocation,
        type_name: &str,
        ast_iface_names: &[String],
        interfaces: &mut Vec<NamedGraphQLTypeRef>,
    ) -> Result<()> {
        for iface_name in ast_iface_names {
            // https://spec.graphql.org/October2021/#sel-HAHZhCFFABABsCqgY
            if interfaces.iter().any(|iface_ref| iface_ref.name() == iface_name) {
                return Err(
                    SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                        def_location: type_def_location.to_owned(),
                        duplicated_interface_name: iface_name.to_string(),
                        type_name: type_name.to_string(),
                    }
                );
            }
            interfaces.push(NamedGraphQLTypeRef::new(
                iface_name,
                type_def_location.to_owned(),
            ));
        }
        Ok(())
    }

    pub fn object_fields_from_ast(
        file_path: &Path,
        type_name: &str,
        ast_fields: &[ast::schema::Field],
        fields: &mut IndexMap<String, Field>,
    ) -> Result<()> {
        for ast_field in ast_fields {
            let field_def_location: loc::SchemaDefLocation =
                loc::FilePosition::from_pos(file_path, ast_field.position).into();

            if ast_field.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    def_location: field_def_location,
                    field_name: ast_field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            if let Some(existing_field) = fields.get(ast_field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: ast_field.name.to_string(),
                    field_def1: existing_field.def_location.to_owned(),
                    field_def2: field_def_location,
                });
            }

            let mut parameters = IndexMap::<String, Parameter>::new();
            for input_val in &ast_field.arguments {
                let param = Parameter::from_ast(file_path, input_val);

                if input_val.name.starts_with("__") {
                    return Err(SchemaBuildError::InvalidDunderPrefixedParamName {
                        def_location: param.def_location,
                        field_name: ast_field.name.to_string(),
                        param_name: input_val.name.to_string(),
                        type_name: type_name.to_string(),
                    });
                }

                if let Some(existing_param) = parameters.get(input_val.name.as_str()) {
                    return Err(SchemaBuildError::DuplicateParameterDefinition {
                        type_name: type_name.to_string(),
                        field_name: ast_field.name.to_string(),
                        param_name: input_val.name.to_string(),
                        param_def1: existing_param.def_location.to_owned(),
                        param_def2: param.def_location,
                    });
                }

                parameters.insert(input_val.name.to_string(), param);
            }

            fields.insert(ast_field.name.to_string(), Field {
                description: ast_field.description.to_owned(),
                name: ast_field.name.to_string(),
                parameters,
                parent_type_name: type_name.to_string(),
                // graphql_parser doesn't give us a location for the field's
                // type, so the field's own position stands in.
                type_annotation: TypeAnnotation::from_ast_type(
                    &field_def_location,
                    &ast_field.field_type,
                ),
                def_location: field_def_location,
            });
        }
        Ok(())
    }

    /// The implicit `__typename: String!` field every object and interface
    /// type carries.
    pub fn typename_field(type_name: &str) -> Field {
        Field {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            description: None,
            name: "__typename".to_string(),
            parameters: IndexMap::new(),
            parent_type_name: type_name.to_string(),
            type_annotation: TypeAnnotation::Named(NamedTypeAnnotation {
                nullable: false,
                type_ref: NamedGraphQLTypeRef::new(
                    "String",
                    loc::SchemaDefLocation::GraphQLBuiltIn,
                ),
            }),
        }
    }

    /// The single `if: Boolean!` argument of the built-in `@skip` and
    /// `@include` directives.
    pub fn condition_parameters() -> IndexMap<String, Parameter> {
        IndexMap::from([(
            "if".to_string(),
            Parameter {
                def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
                default_value: None,
                name: "if".to_string(),
                type_annotation: TypeAnnotation::Named(NamedTypeAnnotation {
                    nullable: false,
                    type_ref: NamedGraphQLTypeRef::new(
                        "Boolean",
                        loc::SchemaDefLocation::GraphQLBuiltIn,
                    ),
                }),
            },
        )])
    }

    pub fn union_members_from_ast(
        type_def_location: &loc::SchemaDefLocation,
        union_name: &str,
        ast_member_names: &[String],
        members: &mut IndexMap<String, NamedGraphQLTypeRef>,
    ) -> Result<()> {
        for member_name in ast_member_names {
            if let Some(existing_member) = members.get(member_name.as_str()) {
                return Err(SchemaBuildError::DuplicatedUnionMember {
                    type_name: union_name.to_string(),
                    member1: existing_member.ref_location().to_owned(),
                    member2: type_def_location.to_owned(),
                });
            }
            members.insert(member_name.to_string(), NamedGraphQLTypeRef::new(
                member_name,
                type_def_location.to_owned(),
            ));
        }
        Ok(())
    }
}
