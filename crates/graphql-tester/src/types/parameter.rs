use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;
use crate::Value;
use std::path::Path;

/// Represents an argument declared on a [`Field`](crate::types::Field).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Parameter {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) default_value: Option<Value>,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub(crate) fn from_ast(
        file_path: &Path,
        input_val: &ast::schema::InputValue,
    ) -> Self {
        let def_location: loc::SchemaDefLocation =
            loc::FilePosition::from_pos(file_path, input_val.position).into();

        Self {
            default_value: input_val.default_value.as_ref().map(Value::from_ast),
            name: input_val.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(
                &def_location,
                &input_val.value_type,
            ),
            def_location,
        }
    }

    /// A parameter must be supplied when its type is non-null and it declares
    /// no default value.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
