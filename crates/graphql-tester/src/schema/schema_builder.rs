use crate::ast;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypesMapBuilder;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`] from one or more SDL documents.
///
/// ```
/// use graphql_tester::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { me: User }")?
///     .load_str(None, "type User { id: ID! }")?
///     .build()?;
///
/// assert!(schema.lookup("User").is_some());
/// # Ok::<(), graphql_tester::schema::SchemaBuildError>(())
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_names: HashSet<String>,
    extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    types_map_builder: TypesMapBuilder,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        // Extensions are applied only once every document has been visited so
        // that an extension may precede its base definition.
        for (ext_path, ext) in self.extensions.iter() {
            self.types_map_builder.merge_type_extension(ext_path.as_path(), ext)?;
        }

        let types = self.types_map_builder.into_types_map()?;

        let query_type = Self::resolve_root_type(
            &types,
            OperationKind::Query,
            self.query_type.take(),
        )?.ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = Self::resolve_root_type(
            &types,
            OperationKind::Mutation,
            self.mutation_type.take(),
        )?;
        let subscription_type = Self::resolve_root_type(
            &types,
            OperationKind::Subscription,
            self.subscription_type.take(),
        )?;

        log::debug!(
            "Built schema with {} types (query root: `{}`)",
            types.len(),
            query_type.name(),
        );

        Ok(Schema {
            directive_names: self.directive_names,
            query_type,
            mutation_type,
            subscription_type,
            types,
        })
    }

    pub fn new() -> Self {
        Self {
            directive_names: HashSet::new(),
            extensions: vec![],
            mutation_type: None,
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    /// Parse and visit one SDL document. When no `file_path` is given, the
    /// document is named `str://{n}` in locations and errors.
    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };
        log::trace!("Loading schema document `{}`", file_path.display());

        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    /// An explicitly declared root must name an object type. Without one, an
    /// object type with the default name (if any) is used.
    fn resolve_root_type(
        types: &HashMap<String, GraphQLType>,
        operation: OperationKind,
        declared: Option<NamedTypeDefLocation>,
    ) -> Result<Option<NamedGraphQLTypeRef>> {
        if let Some(declared) = declared {
            return match types.get(declared.type_name.as_str()) {
                Some(GraphQLType::Object(_)) => Ok(Some(NamedGraphQLTypeRef::new(
                    declared.type_name,
                    declared.def_location,
                ))),
                other_type => Err(SchemaBuildError::InvalidRootOperationType {
                    operation,
                    type_name: declared.type_name,
                    type_kind: other_type.map(GraphQLTypeKind::from),
                    location: declared.def_location,
                }),
            };
        }

        let default_name = match operation {
            OperationKind::Mutation => "Mutation",
            OperationKind::Query => "Query",
            OperationKind::Subscription => "Subscription",
        };
        Ok(match types.get(default_name) {
            Some(GraphQLType::Object(obj_type)) => Some(NamedGraphQLTypeRef::new(
                default_name,
                obj_type.def_location().to_owned(),
            )),
            _ => None,
        })
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.types_map_builder.visit_type_def(file_path, &type_def),
            Definition::TypeExtension(type_ext) => {
                self.extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },
            // Only the name matters: operations may annotate with any declared
            // directive.
            Definition::DirectiveDefinition(directive_def) => {
                self.directive_names.insert(directive_def.name);
                Ok(())
            },
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let declared_roots = [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ];
        for (operation, type_name) in declared_roots {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation::from_pos(
                type_name,
                file_path,
                schema_def.position,
            );
            let root_slot = match operation {
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Query => &mut self.query_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = root_slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.to_owned(),
                    location2: typedef_loc,
                });
            }
            *root_slot = Some(typedef_loc);
        }
        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error(
        "The `{value_name}` value was defined more than once on the \
        `{enum_name}` enum type"
    )]
    DuplicateEnumValueDefinition {
        enum_name: String,
        enum_def_location: loc::SchemaDefLocation,
        value_def1: loc::SchemaDefLocation,
        value_def2: loc::SchemaDefLocation,
        value_name: String,
    },

    #[error(
        "The `{field_name}` field was defined more than once on the \
        `{type_name}` type"
    )]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SchemaDefLocation,
        field_def2: loc::SchemaDefLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::SchemaDefLocation,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("The {operation:?} root operation type was declared more than once")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error(
        "The `{param_name}` parameter was defined more than once on \
        `{type_name}.{field_name}`"
    )]
    DuplicateParameterDefinition {
        type_name: String,
        field_name: String,
        param_name: String,
        param_def1: loc::SchemaDefLocation,
        param_def2: loc::SchemaDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("The `{type_name}` union specifies the same member type multiple times")]
    DuplicatedUnionMember {
        type_name: String,
        member1: loc::SchemaDefLocation,
        member2: loc::SchemaDefLocation,
    },

    #[error("Enum types must define one or more unique variants")]
    EnumWithNoVariants {
        type_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined elsewhere")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_type_loc: loc::SchemaDefLocation,
    },

    #[error(
        "Attempted to extend the `{}` type using a different kind of type \
        extension",
        schema_type.name(),
    )]
    InvalidExtensionType {
        schema_type: GraphQLType,
        extension_loc: loc::SchemaDefLocation,
    },

    #[error("Field names must not start with `__`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Parameter names must not start with `__`")]
    InvalidDunderPrefixedParamName {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        param_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error(
        "The {operation:?} root operation type is declared as `{type_name}`, \
        which is not a defined object type"
    )]
    InvalidRootOperationType {
        operation: OperationKind,
        type_name: String,
        type_kind: Option<GraphQLTypeKind>,
        location: loc::SchemaDefLocation,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error("Error parsing schema document `{}`: {err}", file.display())]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },
}

/// Represents the file location of a given type's definition in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SchemaDefLocation,
    pub type_name: String,
}
impl NamedTypeDefLocation {
    pub(crate) fn from_pos(
        type_name: String,
        file: &Path,
        pos: ast::AstPos,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file, pos).into(),
            type_name,
        }
    }
}
