use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;
use crate::Value;
use std::path::Path;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputField {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) default_value: Option<Value>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) parent_type_name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl InputField {
    /// The [`SchemaDefLocation`](loc::SchemaDefLocation) indicating where this
    /// [`InputField`] was defined within the schema.
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// The description of this [`InputField`] as defined in the schema
    /// (e.g. in a `"""`-string immediately before the input field definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn from_ast(
        file_path: &Path,
        parent_type_name: &str,
        input_val: &ast::schema::InputValue,
    ) -> Self {
        let def_location: loc::SchemaDefLocation =
            loc::FilePosition::from_pos(file_path, input_val.position).into();

        Self {
            default_value: input_val.default_value.as_ref().map(Value::from_ast),
            description: input_val.description.to_owned(),
            name: input_val.name.to_string(),
            parent_type_name: parent_type_name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(
                &def_location,
                &input_val.value_type,
            ),
            def_location,
        }
    }

    /// An input field must be present in an input object value when its type
    /// is non-null and it declares no default value.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }

    /// The name of this [`InputField`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The name of the input object type this field is defined on.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    /// The [`TypeAnnotation`] specifying the schema-defined type of this
    /// [`InputField`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
