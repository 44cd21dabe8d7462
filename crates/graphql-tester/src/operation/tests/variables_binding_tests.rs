use crate::ast;
use crate::operation::OperationKind;
use crate::operation::Variable;
use crate::operation::VariablesBinding;
use crate::operation::VariablesBindingError;
use crate::Value;

#[test]
fn binds_json_object_in_declaration_order() {
    let binding = VariablesBinding::from_json(&serde_json::json!({
        "username": "joe",
        "limit": 5,
        "scores": [1, 2],
    })).unwrap();

    assert_eq!(binding.len(), 3);
    assert_eq!(binding.get("username"), Some(&Value::String("joe".to_string())));
    assert_eq!(binding.get("limit"), Some(&Value::Int(5)));
    assert_eq!(
        binding.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(),
        vec!["username", "limit", "scores"],
    );
}

#[test]
fn json_null_is_an_empty_binding() {
    let binding = VariablesBinding::from_json(&serde_json::Value::Null).unwrap();
    assert!(binding.is_empty());
}

#[test]
fn non_object_json_is_rejected() {
    let result = VariablesBinding::from_json(&serde_json::json!([1, 2]));
    assert_eq!(result, Err(VariablesBindingError::NotAnObject {
        received: "[1,2]".to_string(),
    }));
}

#[test]
fn explicit_null_is_kept_distinct_from_absent() {
    let mut binding = VariablesBinding::new();
    binding.insert("location", Value::Null);

    assert_eq!(binding.get("location"), Some(&Value::Null));
    assert_eq!(binding.get("other"), None);
}

#[test]
fn variable_from_ast_keeps_annotation_and_default() {
    let doc = ast::operation::parse(
        "query Q($limit: [Int!]! = [10], $name: String) { a }"
    ).unwrap();
    let Some(ast::operation::Definition::Operation(
        ast::operation::OperationDefinition::Query(query)
    )) = doc.definitions.first() else {
        panic!("expected a query operation");
    };

    let limit = Variable::from_ast(&query.variable_definitions[0]);
    assert_eq!(limit.name(), "limit");
    assert_eq!(limit.type_annotation().to_string(), "[Int!]!");
    assert_eq!(limit.default_value(), Some(&Value::List(vec![Value::Int(10)])));

    let name = Variable::from_ast(&query.variable_definitions[1]);
    assert!(name.type_annotation().nullable());
    assert_eq!(name.default_value(), None);
}

#[test]
fn shorthand_selection_set_is_a_query() {
    let doc = ast::operation::parse("{ a }").unwrap();
    let Some(ast::operation::Definition::Operation(op_def)) = doc.definitions.first() else {
        panic!("expected an operation");
    };
    assert_eq!(OperationKind::from(op_def), OperationKind::Query);
}
