use crate::loc;

/// A custom scalar declared with `scalar Name`.
///
/// The built-in scalars (`Int`, `Float`, `String`, `Boolean`, `ID`) are not
/// represented by this struct; see [`GraphQLType`](crate::types::GraphQLType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarType {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl ScalarType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
