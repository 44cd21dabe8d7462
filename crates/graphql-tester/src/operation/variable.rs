use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;
use crate::Value;

/// A variable declared in an operation's header, e.g. `$limit: Int = 10`.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub(crate) def_position: ast::AstPos,
    pub(crate) default_value: Option<Value>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Variable {
    pub(crate) fn from_ast(var_def: &ast::operation::VariableDefinition) -> Self {
        Self {
            def_position: var_def.position,
            default_value: var_def.default_value.as_ref().map(Value::from_ast),
            name: var_def.name.to_string(),
            // Operation text has no file of its own.
            type_annotation: TypeAnnotation::from_ast_type(
                &loc::FilePosition::from_pos("<operation>", var_def.position).into(),
                &var_def.var_type,
            ),
        }
    }

    /// Where the variable was declared within the operation text.
    pub fn def_position(&self) -> ast::AstPos {
        self.def_position
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
