use crate::schema::Schema;
use crate::schema::SchemaBuildError;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn setup_schema() -> Result<Schema> {
    Schema::load([
        r#"
        interface Node { id: ID! }
        type Query { node(id: ID!): Node, search: [SearchResult] }
        type User implements Node { id: ID! }
        type Family implements Node { id: ID! }
        type Orphan { id: ID! }
        union SearchResult = User | Orphan
        "#,
    ])
}

#[test]
fn load_accepts_many_documents() -> Result<()> {
    let schema = Schema::load([
        "type Query { me: User }",
        "type User { id: ID! }",
        "extend type User { email: String }",
    ])?;

    let user_fields = schema.lookup("User").unwrap().fields().unwrap();
    assert!(user_fields.contains_key("email"));

    Ok(())
}

#[test]
fn possible_types_of_interface_are_sorted_implementations() -> Result<()> {
    let schema = setup_schema()?;
    let node_type = schema.lookup("Node").unwrap();

    assert_eq!(schema.possible_type_names(node_type), vec!["Family", "User"]);

    Ok(())
}

#[test]
fn possible_types_of_union_are_members() -> Result<()> {
    let schema = setup_schema()?;
    let union_type = schema.lookup("SearchResult").unwrap();

    assert_eq!(schema.possible_type_names(union_type), vec!["User", "Orphan"]);

    Ok(())
}

#[test]
fn possible_types_of_object_and_scalar() -> Result<()> {
    let schema = setup_schema()?;

    let user_type = schema.lookup("User").unwrap();
    assert_eq!(schema.possible_type_names(user_type), vec!["User"]);

    let id_type = schema.lookup("ID").unwrap();
    assert!(schema.possible_type_names(id_type).is_empty());

    Ok(())
}
