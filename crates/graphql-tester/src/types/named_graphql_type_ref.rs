use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use std::collections::HashMap;
use thiserror::Error;

/// A by-name reference to a [`GraphQLType`].
///
/// Types refer to one another through [`NamedGraphQLTypeRef`]s rather than
/// through direct references, which lets [`Schema`] own every type in a single
/// flat map (cycles in the type graph included). De-referencing goes back
/// through the [`Schema`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedGraphQLTypeRef {
    name: String,
    ref_location: loc::SchemaDefLocation,
}
impl NamedGraphQLTypeRef {
    pub fn new(
        name: impl AsRef<str>,
        ref_location: loc::SchemaDefLocation,
    ) -> Self {
        Self {
            name: name.as_ref().to_string(),
            ref_location,
        }
    }

    pub fn deref<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Result<&'schema GraphQLType, DanglingTypeRefError> {
        self.deref_in(&schema.types)
    }

    pub(crate) fn deref_in<'a>(
        &self,
        types_map: &'a HashMap<String, GraphQLType>,
    ) -> Result<&'a GraphQLType, DanglingTypeRefError> {
        types_map.get(self.name.as_str()).ok_or_else(|| DanglingTypeRefError {
            ref_location: self.ref_location.to_owned(),
            type_name: self.name.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Where the reference was written (not where the referenced type was
    /// defined).
    pub fn ref_location(&self) -> &loc::SchemaDefLocation {
        &self.ref_location
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("The type `{type_name}` referenced at {ref_location} is not defined")]
pub struct DanglingTypeRefError {
    pub ref_location: loc::SchemaDefLocation,
    pub type_name: String,
}
