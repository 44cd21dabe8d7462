use crate::Value;
use indexmap::IndexMap;
use thiserror::Error;

/// The runtime values a caller binds to an operation's variables.
///
/// Values bound from JSON carry enum values as strings; see
/// [`Value::from_json`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariablesBinding {
    values: IndexMap<String, Value>,
}
impl VariablesBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind variables from a JSON object such as `{"limit": 5}`. `null`
    /// counts as an empty binding.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, VariablesBindingError> {
        match json {
            serde_json::Value::Object(entries) => Ok(entries.into()),
            serde_json::Value::Null => Ok(Self::new()),
            other => Err(VariablesBindingError::NotAnObject {
                received: other.to_string(),
            }),
        }
    }

    pub fn get(&self, variable_name: &str) -> Option<&Value> {
        self.values.get(variable_name)
    }

    pub fn insert(
        &mut self,
        variable_name: impl Into<String>,
        value: Value,
    ) -> Option<Value> {
        self.values.insert(variable_name.into(), value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}
impl std::convert::From<&serde_json::Map<String, serde_json::Value>> for VariablesBinding {
    fn from(value: &serde_json::Map<String, serde_json::Value>) -> Self {
        value.iter()
            .map(|(name, json)| (name.to_string(), Value::from_json(json)))
            .collect()
    }
}
impl std::iter::FromIterator<(String, Value)> for VariablesBinding {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum VariablesBindingError {
    #[error("Variables must be bound from a JSON object, but received `{received}`")]
    NotAnObject {
        received: String,
    },
}
