use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub(super) struct ObjectOrInterfaceTypeData {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, Field>,
    pub(super) interfaces: Vec<NamedGraphQLTypeRef>,
    pub(super) name: String,
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn implements_interface(
        &self,
        schema: &Schema,
        interface_name: &str,
    ) -> bool {
        self.interfaces
            .iter()
            .any(|iface_ref| {
                iface_ref.name() == interface_name
                    || schema.lookup(iface_ref.name())
                        .and_then(|type_| type_.as_interface())
                        .is_some_and(|iface| {
                            iface.implements_interface(schema, interface_name)
                        })
            })
    }

    // Refs that don't resolve to an interface are rejected when the schema is
    // built, so filtering here never drops anything for a built schema.
    pub fn interfaces<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema InterfaceType> {
        self.interfaces
            .iter()
            .filter_map(|iface_ref| {
                schema.lookup(iface_ref.name())
                    .and_then(|type_| type_.as_interface())
            })
            .collect()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_ref| iface_ref.name())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
