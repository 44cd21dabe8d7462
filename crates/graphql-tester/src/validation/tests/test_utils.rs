use crate::ast;
use crate::operation::Variable;
use crate::operation::VariablesBinding;
use crate::schema::Schema;
use crate::types::TypeAnnotation;
use crate::validation::OperationValidator;
use crate::validation::ValidationResult;
use indexmap::IndexMap;

pub(super) fn setup_schema() -> Schema {
    Schema::load([
        r#"
        directive @cached(ttl: Int) on FIELD

        scalar DateTime

        enum Role { ADMIN USER }

        input UserInput {
            email: String!
            username: String!
            nickname: String
            role: Role = USER
        }

        input ScoresInput { scores: [Int]! }

        interface Node { id: ID! }

        type User implements Node {
            id: ID!
            email: String
            role: Role
            friends(first: Int = 10): [User]
        }

        type Post implements Node { id: ID! title: String }

        type Family { id: ID! }

        union SearchResult = User | Post

        type Query {
            user(id: ID!): User
            users(role: Role, limit: Int): [User]
            node(id: ID!): Node
            search(text: String!): [SearchResult]
            family: Family
            now: DateTime
            at(time: DateTime): String
            scoreOf(ratio: Float): Int
        }

        type Mutation {
            createUser(input: UserInput!): User
            setScores(input: ScoresInput!): Boolean
            tag(names: [String!]!): [String]
            rename(name: String!, nickname: String = "anon"): String
        }
        "#,
    ]).expect("test schema builds")
}

pub(super) fn validate(
    schema: &Schema,
    operation_src: &str,
    variables: serde_json::Value,
) -> ValidationResult {
    let document = ast::operation::parse(operation_src).expect("parse error");
    let variables = VariablesBinding::from_json(&variables).expect("variables object");
    OperationValidator::new(schema).validate(&document, &variables)
}

pub(super) fn type_annotation(type_src: &str) -> TypeAnnotation {
    let var_defs = variable_defs(format!("$v: {type_src}").as_str());
    var_defs["v"].type_annotation().to_owned()
}

/// Variable definitions as they would be declared in `query(...)`.
pub(super) fn variable_defs(var_defs_src: &str) -> IndexMap<String, Variable> {
    let doc = ast::operation::parse(
        format!("query({var_defs_src}) {{ a }}").as_str()
    ).expect("parse error");
    match doc.definitions.first() {
        Some(ast::operation::Definition::Operation(
            ast::operation::OperationDefinition::Query(query)
        )) => query.variable_definitions.iter()
            .map(Variable::from_ast)
            .map(|var| (var.name().to_string(), var))
            .collect(),
        _ => panic!("expected a query"),
    }
}

