//! Owned (`'static`, `String`-backed) aliases for the parts of the
//! [`graphql-parser`](graphql_parser) AST that schema loading and operation
//! validation walk.

pub mod operation {
    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Directive = graphql_parser::query::Directive<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type Field = graphql_parser::query::Field<'static, String>;
    pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
    pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
    pub type Selection = graphql_parser::query::Selection<'static, String>;
    pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
    pub type Type = graphql_parser::query::Type<'static, String>;
    pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;
    pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;

    /// Parse operation text into an owned [`Document`].
    pub fn parse(
        operation_src: &str,
    ) -> Result<Document, graphql_parser::query::ParseError> {
        Ok(graphql_parser::query::parse_query::<String>(operation_src)?.into_static())
    }
}

pub mod schema {
    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
    pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;

    /// Parse an SDL document into an owned [`Document`](graphql_parser::schema::Document).
    pub fn parse(
        schema_src: &str,
    ) -> Result<graphql_parser::schema::Document<'static, String>, graphql_parser::schema::ParseError> {
        Ok(graphql_parser::schema::parse_schema::<String>(schema_src)?.into_static())
    }
}

pub type AstPos = graphql_parser::Pos;
pub type Value = graphql_parser::query::Value<'static, String>;
