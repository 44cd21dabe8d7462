use crate::ast;
use crate::operation::OperationSource;
use crate::operation::VariablesBinding;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::validation::OperationValidator;
use crate::validation::ValidationError;
use crate::validation::ValidationResult;
use thiserror::Error;

type Result<T> = std::result::Result<T, TestFailure>;

/// Asserts that operations are (or deliberately are not) valid against a
/// schema.
///
/// A tester holds no state besides its [`Schema`], so one instance can be
/// shared across threads and used for any number of checks.
#[derive(Clone, Debug)]
pub struct GraphQLTester {
    schema: Schema,
}
impl GraphQLTester {
    /// Build the schema from SDL documents and wrap it in a tester.
    pub fn from_sdl<S: AsRef<str>>(
        documents: impl IntoIterator<Item = S>,
    ) -> std::result::Result<Self, SchemaBuildError> {
        Ok(Self::new(Schema::load(documents)?))
    }

    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Check `operation` against `expected_valid` with no variables bound.
    pub fn test<'a>(
        &self,
        expected_valid: bool,
        operation: impl Into<OperationSource<'a>>,
    ) -> Result<()> {
        self.test_with_variables(expected_valid, operation, &VariablesBinding::new())
    }

    /// Like [`GraphQLTester::test_with_variables`], for callers whose
    /// expectation arrives as untyped data (e.g. a JSON test case). Anything
    /// other than a boolean is rejected before the operation is looked at.
    pub fn test_dynamic<'a>(
        &self,
        expected_valid: &serde_json::Value,
        operation: impl Into<OperationSource<'a>>,
        variables: &VariablesBinding,
    ) -> Result<()> {
        let serde_json::Value::Bool(expected_valid) = expected_valid else {
            return Err(TestFailure::InvalidExpectationType {
                received: expected_valid.to_string(),
            });
        };
        self.test_with_variables(*expected_valid, operation, variables)
    }

    /// Validate `operation` with `variables` bound and reconcile the outcome
    /// with `expected_valid`.
    ///
    /// An operation expected to be invalid passes on any validation failure,
    /// except one that points at a defect in the schema itself.
    pub fn test_with_variables<'a>(
        &self,
        expected_valid: bool,
        operation: impl Into<OperationSource<'a>>,
        variables: &VariablesBinding,
    ) -> Result<()> {
        match (expected_valid, self.validate(operation, variables)) {
            (_, Err(err)) if err.is_fatal() => Err(TestFailure::SchemaDefect(err)),
            (true, Ok(())) | (false, Err(_)) => Ok(()),
            (true, Err(err)) => Err(TestFailure::Invalid(err)),
            (false, Ok(())) => Err(TestFailure::ExpectationMismatch),
        }
    }

    /// Validate without any expectation. Text that fails to parse is reported
    /// as [`ValidationError::SyntaxError`].
    pub fn validate<'a>(
        &self,
        operation: impl Into<OperationSource<'a>>,
        variables: &VariablesBinding,
    ) -> ValidationResult {
        let validator = OperationValidator::new(&self.schema);
        match operation.into() {
            OperationSource::Document(document) =>
                validator.validate(document, variables),

            OperationSource::Text(operation_src) => {
                let document = ast::operation::parse(operation_src)
                    .map_err(|err| ValidationError::SyntaxError {
                        message: err.to_string(),
                    })?;
                validator.validate(&document, variables)
            },
        }
    }
}

/// Why a [`GraphQLTester`] assertion did not hold.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TestFailure {
    #[error("Failed, there should be an error and the passed query/mutation is valid")]
    ExpectationMismatch,

    #[error(transparent)]
    Invalid(ValidationError),

    #[error("isValid argument must be a boolean")]
    InvalidExpectationType {
        received: String,
    },

    #[error("The schema is defective: {0}")]
    SchemaDefect(ValidationError),
}
