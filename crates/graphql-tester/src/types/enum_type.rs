use crate::loc;
use crate::types::EnumValue;
use indexmap::IndexMap;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn has_value(&self, value_name: &str) -> bool {
        self.values.contains_key(value_name)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The values of this enum, ordered as they were declared (values added by
    /// type extensions follow the values of the base definition).
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}
