use crate::ast;

/// Which root operation type an operation selects from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}
impl std::convert::From<&ast::operation::OperationDefinition> for OperationKind {
    fn from(value: &ast::operation::OperationDefinition) -> Self {
        use ast::operation::OperationDefinition;
        match value {
            OperationDefinition::Mutation(_) => Self::Mutation,
            OperationDefinition::Query(_)
                | OperationDefinition::SelectionSet(_) => Self::Query,
            OperationDefinition::Subscription(_) => Self::Subscription,
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
