use crate::types::GraphQLType;

/// The category of a [`GraphQLType`], without its definition.
///
/// The five built-in scalars share [`GraphQLTypeKind::Scalar`] with custom
/// scalars.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl GraphQLTypeKind {
    /// Same as [`GraphQLTypeKind::name()`], preceded by "a" or "an".
    pub fn indefinite_name(&self) -> &'static str {
        match self {
            Self::Enum => "an enum",
            Self::InputObject => "an input object",
            Self::Interface => "an interface",
            Self::Object => "an object",
            Self::Scalar => "a scalar",
            Self::Union => "a union",
        }
    }

    /// Kinds that may annotate an argument, an input field, or a variable.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Enum | Self::InputObject | Self::Scalar)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::InputObject => "input object",
            Self::Interface => "interface",
            Self::Object => "object",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }
}
impl std::convert::From<&GraphQLType> for GraphQLTypeKind {
    fn from(value: &GraphQLType) -> Self {
        match value {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                => Self::Scalar,
            GraphQLType::Enum(_) => Self::Enum,
            GraphQLType::InputObject(_) => Self::InputObject,
            GraphQLType::Interface(_) => Self::Interface,
            GraphQLType::Object(_) => Self::Object,
            GraphQLType::Union(_) => Self::Union,
        }
    }
}
impl std::fmt::Display for GraphQLTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
