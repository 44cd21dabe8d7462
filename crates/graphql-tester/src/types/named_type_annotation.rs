use crate::loc;
use crate::types::NamedGraphQLTypeRef;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_ref: NamedGraphQLTypeRef,
}
impl NamedTypeAnnotation {
    pub fn graphql_type_name(&self) -> &str {
        self.type_ref.name()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SchemaDefLocation {
        self.type_ref.ref_location()
    }

    pub fn type_ref(&self) -> &NamedGraphQLTypeRef {
        &self.type_ref
    }
}
