use crate::loc;
use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::GraphQLTypeKind;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn build_without_load() {
        let schema = SchemaBuilder::new().build();

        assert!(matches!(
            schema.unwrap_err(),
            SchemaBuildError::NoQueryOperationTypeDefined,
        ));
    }

    #[test]
    fn load_all_empty_operation_types_in_single_str() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Mutation\n",
                "type Query\n",
                "type Subscription",
            ))?
            .build()?;

        // 5 builtin scalars + 3 root types
        assert_eq!(schema.all_types().len(), 8);

        for (kind, type_name) in [
            (OperationKind::Mutation, "Mutation"),
            (OperationKind::Query, "Query"),
            (OperationKind::Subscription, "Subscription"),
        ] {
            let root_type = schema.root_type(&kind).expect("root type is defined");
            let root_obj_type = root_type.as_object().expect("type is an object type");
            assert_eq!(root_obj_type.name(), type_name);
            assert_eq!(root_obj_type.fields().keys().collect::<Vec<_>>(), vec![
                &"__typename".to_string(),
            ]);
        }

        Ok(())
    }

    #[test]
    fn only_query_root_is_required() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")?
            .build()?;

        assert!(schema.query_type().is_some());
        assert!(schema.mutation_type().is_none());
        assert!(schema.subscription_type().is_none());

        Ok(())
    }

    #[test]
    fn types_merge_across_documents() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { me: User }")?
            .load_str(None, "type User { id: ID! familyInfo: FamilyInfo }")?
            .load_str(None, "type FamilyInfo { father: User }")?
            .build()?;

        assert!(schema.lookup("User").is_some());
        assert!(schema.lookup("FamilyInfo").is_some());

        Ok(())
    }

    #[test]
    fn str_documents_are_named_by_load_order() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")?
            .load_str(None, "type User { id: ID }")?
            .build()?;

        let user_type = schema.lookup("User").unwrap();
        let loc::SchemaDefLocation::Schema(file_pos) = user_type.def_location() else {
            panic!("expected a schema location");
        };
        assert_eq!(file_pos.file, PathBuf::from("str://1"));
        assert_eq!(file_pos.line, 1);

        Ok(())
    }

    #[test]
    fn directive_definitions_are_recorded_and_annotations_ignored() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, r#"
                directive @auth(requires: String) on FIELD_DEFINITION
                type Query {
                    me: String @auth(requires: "USER")
                    old: String @deprecated(reason: "gone")
                }
            "#)?
            .build()?;

        assert!(schema.query_type().unwrap().fields().unwrap().contains_key("old"));
        assert!(schema.defines_directive("auth"));
        assert!(!schema.defines_directive("deprecated"));

        Ok(())
    }
}

mod root_operation_types {
    use super::*;

    #[test]
    fn schema_block_overrides_default_names() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "
                schema { query: RootQuery, mutation: RootMutation }
                type RootQuery { a: Int }
                type RootMutation { b: Int }
                type Query { ignored: Int }
            ")?
            .build()?;

        assert_eq!(schema.query_type().unwrap().name(), "RootQuery");
        assert_eq!(schema.mutation_type().unwrap().name(), "RootMutation");

        Ok(())
    }

    #[test]
    fn schema_block_naming_undefined_type() {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: Missing }")
            .and_then(|builder| builder.build());

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidRootOperationType {
                operation: OperationKind::Query,
                type_kind: None,
                ..
            }),
        ));
    }

    #[test]
    fn schema_block_naming_non_object_type() {
        let result = SchemaBuilder::new()
            .load_str(None, "
                schema { query: Q }
                input Q { a: Int }
            ")
            .and_then(|builder| builder.build());

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidRootOperationType {
                type_kind: Some(GraphQLTypeKind::InputObject),
                ..
            }),
        ));
    }

    #[test]
    fn duplicate_schema_block_root() {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: A }")
            .and_then(|builder| builder.load_str(None, "schema { query: B }"));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateOperationDefinition {
                operation: OperationKind::Query,
                ..
            }),
        ));
    }
}

mod type_definitions {
    use super::*;

    #[test]
    fn malformed_sdl_is_a_parse_error() {
        let result = SchemaBuilder::new().load_str(None, "type Query {");

        assert!(matches!(
            result,
            Err(SchemaBuildError::ParseError { file, .. })
                if file == PathBuf::from("str://0")
        ));
    }

    #[test]
    fn duplicate_type_across_documents() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int } type User { id: ID }")
            .and_then(|builder| builder.load_str(None, "type User { name: String }"));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition { type_name, .. })
                if type_name == "User"
        ));
    }

    #[test]
    fn duplicate_field_on_one_type() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int a: String }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldNameDefinition { field_name, .. })
                if field_name == "a"
        ));
    }

    #[test]
    fn duplicate_parameter_on_one_field() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a(x: Int, x: Int): Int }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateParameterDefinition { param_name, .. })
                if param_name == "x"
        ));
    }

    #[test]
    fn dunder_prefixed_names_are_rejected() {
        assert!(matches!(
            SchemaBuilder::new().load_str(None, "type __Query { a: Int }"),
            Err(SchemaBuildError::InvalidDunderPrefixedTypeName { .. }),
        ));
        assert!(matches!(
            SchemaBuilder::new().load_str(None, "type Query { __a: Int }"),
            Err(SchemaBuildError::InvalidDunderPrefixedFieldName { .. }),
        ));
        assert!(matches!(
            SchemaBuilder::new().load_str(None, "type Query { a(__x: Int): Int }"),
            Err(SchemaBuildError::InvalidDunderPrefixedParamName { .. }),
        ));
    }

    #[test]
    fn undefined_field_type_is_reported_at_build() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { me: User }")
            .and_then(|builder| builder.build());

        let errors = match result {
            Err(SchemaBuildError::TypeValidationErrors { errors }) => errors,
            other => panic!("expected type validation errors, got {other:?}"),
        };
        assert!(matches!(
            errors.as_slice(),
            [TypeValidationError::UndefinedTypeName { undefined_type_name, .. }]
                if undefined_type_name == "User"
        ));
    }

    #[test]
    fn output_field_with_input_type_is_reported_at_build() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { me: UserInput } input UserInput { a: Int }")
            .and_then(|builder| builder.build());

        let errors = match result {
            Err(SchemaBuildError::TypeValidationErrors { errors }) => errors,
            other => panic!("expected type validation errors, got {other:?}"),
        };
        assert!(matches!(
            errors.as_slice(),
            [TypeValidationError::InvalidOutputFieldWithInputType { field_name, .. }]
                if field_name == "me"
        ));
    }

    #[test]
    fn parameter_with_output_type_is_reported_at_build() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { find(user: User): Int } type User { id: ID }")
            .and_then(|builder| builder.build());

        let errors = match result {
            Err(SchemaBuildError::TypeValidationErrors { errors }) => errors,
            other => panic!("expected type validation errors, got {other:?}"),
        };
        assert!(matches!(
            errors.as_slice(),
            [TypeValidationError::InvalidParameterWithOutputType { parameter_name, .. }]
                if parameter_name == "user"
        ));
    }
}

mod type_extensions {
    use super::*;

    #[test]
    fn extension_may_precede_definition() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "extend type User { email: String }")?
            .load_str(None, "type Query { me: User } type User { id: ID }")?
            .build()?;

        let user_fields = schema.lookup("User").unwrap().fields().unwrap();
        assert!(user_fields.contains_key("id"));
        assert!(user_fields.contains_key("email"));

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int } extend type User { id: ID }")
            .and_then(|builder| builder.build());

        assert!(matches!(
            result,
            Err(SchemaBuildError::ExtensionOfUndefinedType { type_name, .. })
                if type_name == "User"
        ));
    }

    #[test]
    fn extension_of_different_kind_of_type() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int } input User { id: ID } extend type User { b: Int }")
            .and_then(|builder| builder.build());

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidExtensionType { .. }),
        ));
    }

    #[test]
    fn extension_redefining_a_field() {
        let result = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int } extend type Query { a: String }")
            .and_then(|builder| builder.build());

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldNameDefinition { field_name, .. })
                if field_name == "a"
        ));
    }
}
