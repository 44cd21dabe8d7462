use crate::operation::OperationKind;
use crate::types::DanglingTypeRefError;
use thiserror::Error;

/// Why an operation failed validation.
///
/// The `Display` output of each variant is the single message reported for
/// the failure; several of them are matched verbatim by existing test suites
/// and must not change.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("The input value on {field_name} is an array and it must be an object")]
    ArrayMismatch {
        field_name: String,
    },

    #[error("The `{argument_name}` argument was supplied more than once on {field_name}")]
    DuplicateArgument {
        argument_name: String,
        field_name: String,
    },

    #[error("The `{fragment_name}` fragment is defined more than once")]
    DuplicateFragment {
        fragment_name: String,
    },

    #[error("The `${variable_name}` variable is declared more than once")]
    DuplicateVariable {
        variable_name: String,
    },

    #[error("The input value on {field_name} is {value_shape} and it must be an array")]
    ExpectedArray {
        field_name: String,
        value_shape: String,
    },

    #[error(
        "The `{field_name}` field can not be selected directly on the \
        `{union_name}` union; select it within an inline fragment instead"
    )]
    FieldSelectedOnUnion {
        field_name: String,
        union_name: String,
    },

    #[error("The `{fragment_name}` fragment spreads itself")]
    FragmentCycle {
        fragment_name: String,
    },

    #[error(
        "A fragment on `{fragment_type_name}` can never apply within a \
        selection on `{parent_type_name}`"
    )]
    InvalidFragmentTypeCondition {
        fragment_type_name: String,
        parent_type_name: String,
    },

    #[error("The `{argument_name}` argument is required on {field_name}")]
    MissingRequiredArgument {
        argument_name: String,
        field_name: String,
    },

    #[error("The `{field_name}` field is required on the `{type_name}` input type")]
    MissingRequiredField {
        field_name: String,
        type_name: String,
    },

    #[error("The schema does not define a {operation} root operation type")]
    MissingRootOperationType {
        operation: OperationKind,
    },

    #[error(
        "The `{field_name}` field returns the `{type_name}` type and must have \
        a selection of subfields"
    )]
    MissingSelection {
        field_name: String,
        type_name: String,
    },

    #[error("{variable_name} values are missing on {field_name}")]
    MissingVariable {
        field_name: String,
        variable_name: String,
    },

    #[error("Expected a single operation, but the document defines {count}")]
    MultipleOperations {
        count: usize,
    },

    #[error("The document does not define an operation")]
    NoOperation,

    #[error(
        "The `${variable_name}` variable is declared with the `{type_name}` \
        type, which is not an input type"
    )]
    NonInputVariableType {
        type_name: String,
        variable_name: String,
    },

    #[error("Syntax error: {message}")]
    SyntaxError {
        message: String,
    },

    #[error(
        "The input value `{value}` on {field_name} does not match the \
        expected `{expected_type}` type"
    )]
    TypeMismatch {
        expected_type: String,
        field_name: String,
        value: String,
    },

    #[error("The `${variable_name}` variable used on {field_name} is not declared by the operation")]
    UndeclaredVariable {
        field_name: String,
        variable_name: String,
    },

    #[error(
        "The `${variable_name}` variable is declared with the `{type_name}` \
        type, which is not defined in the schema"
    )]
    UndefinedVariableType {
        type_name: String,
        variable_name: String,
    },

    #[error(
        "The `{field_name}` field returns the `{type_name}` type, which has no \
        subfields to select"
    )]
    UnexpectedSelection {
        field_name: String,
        type_name: String,
    },

    #[error("The `{argument_name}` argument is not defined on {field_name}")]
    UnknownArgument {
        argument_name: String,
        field_name: String,
    },

    #[error("The `@{directive_name}` directive is not defined by the schema")]
    UnknownDirective {
        directive_name: String,
    },

    #[error(
        "The input value on {field_name} is `{value}`, which is not a value \
        of the `{enum_name}` enum"
    )]
    UnknownEnumValue {
        enum_name: String,
        field_name: String,
        value: String,
    },

    #[error("The `{field_name}` field is not defined on the `{type_name}` type")]
    UnknownField {
        field_name: String,
        type_name: String,
    },

    #[error("There is no fragment named `{fragment_name}`")]
    UnknownFragment {
        fragment_name: String,
    },

    #[error("The fragment type condition `{type_name}` is not defined in the schema")]
    UnknownFragmentType {
        type_name: String,
    },

    #[error("The schema references the undefined type `{type_name}`")]
    UnknownType {
        type_name: String,
    },

    #[error(
        "The `${variable_name}` variable of type `{variable_type}` can not be \
        used where `{location_type}` is expected"
    )]
    VariableTypeMismatch {
        location_type: String,
        variable_name: String,
        variable_type: String,
    },
}
impl ValidationError {
    /// Failures that indicate a defect in the schema rather than in the
    /// operation under test.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::UnknownType { .. })
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.into()
    }
}
impl std::convert::From<DanglingTypeRefError> for ValidationError {
    fn from(value: DanglingTypeRefError) -> Self {
        Self::UnknownType {
            type_name: value.type_name,
        }
    }
}

/// Similar to [`ValidationError`] except without the corresponding metadata.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValidationErrorKind {
    ArrayMismatch,
    DuplicateArgument,
    DuplicateFragment,
    DuplicateVariable,
    ExpectedArray,
    FieldSelectedOnUnion,
    FragmentCycle,
    InvalidFragmentTypeCondition,
    MissingRequiredArgument,
    MissingRequiredField,
    MissingRootOperationType,
    MissingSelection,
    MissingVariable,
    MultipleOperations,
    NoOperation,
    NonInputVariableType,
    SyntaxError,
    TypeMismatch,
    UndeclaredVariable,
    UndefinedVariableType,
    UnexpectedSelection,
    UnknownArgument,
    UnknownDirective,
    UnknownEnumValue,
    UnknownField,
    UnknownFragment,
    UnknownFragmentType,
    UnknownType,
    VariableTypeMismatch,
}
impl std::convert::From<&ValidationError> for ValidationErrorKind {
    fn from(value: &ValidationError) -> Self {
        use ValidationError as E;
        match value {
            E::ArrayMismatch { .. } => Self::ArrayMismatch,
            E::DuplicateArgument { .. } => Self::DuplicateArgument,
            E::DuplicateFragment { .. } => Self::DuplicateFragment,
            E::DuplicateVariable { .. } => Self::DuplicateVariable,
            E::ExpectedArray { .. } => Self::ExpectedArray,
            E::FieldSelectedOnUnion { .. } => Self::FieldSelectedOnUnion,
            E::FragmentCycle { .. } => Self::FragmentCycle,
            E::InvalidFragmentTypeCondition { .. } => Self::InvalidFragmentTypeCondition,
            E::MissingRequiredArgument { .. } => Self::MissingRequiredArgument,
            E::MissingRequiredField { .. } => Self::MissingRequiredField,
            E::MissingRootOperationType { .. } => Self::MissingRootOperationType,
            E::MissingSelection { .. } => Self::MissingSelection,
            E::MissingVariable { .. } => Self::MissingVariable,
            E::MultipleOperations { .. } => Self::MultipleOperations,
            E::NoOperation => Self::NoOperation,
            E::NonInputVariableType { .. } => Self::NonInputVariableType,
            E::SyntaxError { .. } => Self::SyntaxError,
            E::TypeMismatch { .. } => Self::TypeMismatch,
            E::UndeclaredVariable { .. } => Self::UndeclaredVariable,
            E::UndefinedVariableType { .. } => Self::UndefinedVariableType,
            E::UnexpectedSelection { .. } => Self::UnexpectedSelection,
            E::UnknownArgument { .. } => Self::UnknownArgument,
            E::UnknownDirective { .. } => Self::UnknownDirective,
            E::UnknownEnumValue { .. } => Self::UnknownEnumValue,
            E::UnknownField { .. } => Self::UnknownField,
            E::UnknownFragment { .. } => Self::UnknownFragment,
            E::UnknownFragmentType { .. } => Self::UnknownFragmentType,
            E::UnknownType { .. } => Self::UnknownType,
            E::VariableTypeMismatch { .. } => Self::VariableTypeMismatch,
        }
    }
}
