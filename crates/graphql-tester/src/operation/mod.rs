mod operation_kind;
mod operation_source;
mod variable;
mod variables_binding;

pub use operation_kind::OperationKind;
pub use operation_source::OperationSource;
pub use variable::Variable;
pub use variables_binding::VariablesBinding;
pub use variables_binding::VariablesBindingError;

#[cfg(test)]
mod tests;
