use crate::schema::TypeValidationError;
use crate::types::tests::test_utils;
use crate::types::InputObjectTypeValidator;

#[test]
fn basic_flat_input_object_type_validates() {
    let types_map_builder = test_utils::types_map_builder_from(
        "input TestInputObject {
            field1: Int,
            field2: Int!,
        }"
    );
    let input_obj_type = test_utils::get_input_object_type(
        &types_map_builder,
        "TestInputObject",
    );

    let errors = InputObjectTypeValidator::new(
        input_obj_type,
        &types_map_builder.types,
    ).validate();

    assert_eq!(errors, vec![]);
}

#[test]
fn input_object_with_non_recursive_input_obj_field_validates() {
    let types_map_builder = test_utils::types_map_builder_from(
        "input TestInputObject1 { field1: Int, field2: Int! }
         input TestInputObject2 { field3: Int, field4: TestInputObject1! }"
    );
    let input_obj_type = test_utils::get_input_object_type(
        &types_map_builder,
        "TestInputObject2",
    );

    let errors = InputObjectTypeValidator::new(
        input_obj_type,
        &types_map_builder.types,
    ).validate();

    assert_eq!(errors, vec![]);
}

#[test]
fn nullable_self_reference_validates() {
    let types_map_builder = test_utils::types_map_builder_from(
        "input ItemWhereInput {
            OR: [ItemWhereInput!]
            parent: ItemWhereInput
            title_contains: String
        }"
    );
    let input_obj_type = test_utils::get_input_object_type(
        &types_map_builder,
        "ItemWhereInput",
    );

    let errors = InputObjectTypeValidator::new(
        input_obj_type,
        &types_map_builder.types,
    ).validate();

    assert_eq!(errors, vec![]);
}

#[test]
fn non_null_self_reference_is_a_circular_chain() {
    let types_map_builder = test_utils::types_map_builder_from(
        "input Loop { next: Loop! }"
    );
    let input_obj_type = test_utils::get_input_object_type(&types_map_builder, "Loop");

    let errors = InputObjectTypeValidator::new(
        input_obj_type,
        &types_map_builder.types,
    ).validate();

    assert_eq!(errors, vec![
        TypeValidationError::CircularInputFieldChain {
            circular_field_path: vec![
                "Loop.next".to_string(),
                "Loop".to_string(),
            ],
        },
    ]);
}

#[test]
fn non_null_chain_through_two_types_is_circular() {
    let types_map_builder = test_utils::types_map_builder_from(
        "input A { b: B!, label: String }
         input B { a: [A!]! }"
    );
    let input_obj_type = test_utils::get_input_object_type(&types_map_builder, "A");

    let errors = InputObjectTypeValidator::new(
        input_obj_type,
        &types_map_builder.types,
    ).validate();

    assert_eq!(errors, vec![
        TypeValidationError::CircularInputFieldChain {
            circular_field_path: vec![
                "A.b".to_string(),
                "B".to_string(),
                "B.a".to_string(),
                "A".to_string(),
            ],
        },
    ]);
}

#[test]
fn input_field_with_object_type_is_rejected() {
    let types_map_builder = test_utils::types_map_builder_from(
        "type User { id: ID }
         input UserFilter { user: User }"
    );
    let input_obj_type = test_utils::get_input_object_type(&types_map_builder, "UserFilter");

    let errors = InputObjectTypeValidator::new(
        input_obj_type,
        &types_map_builder.types,
    ).validate();

    assert!(matches!(
        errors.as_slice(),
        [TypeValidationError::InvalidInputFieldWithOutputType {
            field_name,
            invalid_type_name,
            parent_type_name,
            ..
        }] if field_name == "user"
            && invalid_type_name == "User"
            && parent_type_name == "UserFilter"
    ));
}

#[test]
fn input_field_with_undefined_type_is_rejected() {
    let types_map_builder = test_utils::types_map_builder_from(
        "input UserFilter { role: Role }"
    );
    let input_obj_type = test_utils::get_input_object_type(&types_map_builder, "UserFilter");

    let errors = InputObjectTypeValidator::new(
        input_obj_type,
        &types_map_builder.types,
    ).validate();

    assert!(matches!(
        errors.as_slice(),
        [TypeValidationError::UndefinedTypeName { undefined_type_name, .. }]
            if undefined_type_name == "Role"
    ));
}
