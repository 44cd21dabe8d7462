//! Structural validation of an operation against a [`Schema`](crate::schema::Schema).
//!
//! [`OperationValidator`] is the entry point; it drives
//! [`SelectionValidator`], which calls [`ArgumentValidator`] for each field
//! invocation, which in turn hands every supplied value to [`ValueCoercer`].
//! The first failure found anywhere ends validation.

mod argument_validator;
mod operation_validator;
mod selection_validator;
mod validation_error;
mod value_coercer;

pub use argument_validator::ArgumentValidator;
pub use operation_validator::OperationValidator;
pub use selection_validator::SelectionValidator;
pub use validation_error::ValidationError;
pub use validation_error::ValidationErrorKind;
pub use value_coercer::CoercionSite;
pub use value_coercer::ValueCoercer;

/// The outcome of validating one operation.
pub type ValidationResult = std::result::Result<(), ValidationError>;

#[cfg(test)]
mod tests;
