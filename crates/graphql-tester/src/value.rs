use crate::ast;
use indexmap::IndexMap;

/// A GraphQL input value, either written literally in an operation or bound
/// to a variable by the caller.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Bool(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    VarRef(String),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// How this value's shape reads in a sentence, e.g. "an object".
    pub(crate) fn shape_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "a boolean",
            Self::Enum(_) => "an enum value",
            Self::Float(_) | Self::Int(_) => "a number",
            Self::List(_) => "an array",
            Self::Null => "null",
            Self::Object(_) => "an object",
            Self::String(_) => "a string",
            Self::VarRef(_) => "a variable",
        }
    }

    pub(crate) fn from_ast(ast_value: &ast::Value) -> Self {
        match ast_value {
            ast::Value::Variable(var_name) =>
                Value::VarRef(var_name.to_string()),

            // graphql-parser stores every integer literal as an i64.
            ast::Value::Int(number) =>
                Value::Int(number.as_i64().unwrap_or_default()),

            ast::Value::Float(value) =>
                Value::Float(*value),

            ast::Value::String(value) =>
                Value::String(value.to_string()),

            ast::Value::Boolean(value) =>
                Value::Bool(*value),

            ast::Value::Null =>
                Value::Null,

            ast::Value::Enum(value) =>
                Value::Enum(value.to_string()),

            ast::Value::List(values) =>
                Value::List(values.iter().map(Value::from_ast).collect()),

            ast::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, ast_value)|
                    (key.to_string(), Value::from_ast(ast_value))
                ).collect()),
        }
    }

    /// Convert a JSON value (as a caller would bind to a variable) into a
    /// [`Value`].
    ///
    /// JSON has no enum or variable syntax, so the result never contains
    /// [`Value::Enum`] or [`Value::VarRef`]; enum values arrive as
    /// [`Value::String`].
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Bool(*value),
            serde_json::Value::Number(number) =>
                if let Some(int) = number.as_i64() {
                    Value::Int(int)
                } else {
                    Value::Float(number.as_f64().unwrap_or(f64::NAN))
                },
            serde_json::Value::String(value) => Value::String(value.to_string()),
            serde_json::Value::Array(values) =>
                Value::List(values.iter().map(Value::from_json).collect()),
            serde_json::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, json)|
                    (key.to_string(), Value::from_json(json))
                ).collect()),
        }
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Enum(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::List(values) => {
                write!(f, "[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            },
            Self::Null => write!(f, "null"),
            Self::Object(entries) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {key}: {value}")?;
                }
                write!(f, " }}")
            },
            Self::String(value) => write!(f, "{value:?}"),
            Self::VarRef(name) => write!(f, "${name}"),
        }
    }
}
impl std::convert::From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Self::from_json(value)
    }
}
