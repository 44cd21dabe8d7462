use crate::operation::VariablesBinding;
use crate::schema::SchemaBuilder;
use crate::GraphQLTester;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;
use std::path::Path;
use std::path::PathBuf;
use super::fixture_test_case;
use super::fixture_test_case::FixtureTestCase;

/// Result of a single fixture test
#[derive(Debug)]
pub struct FixtureTestResult {
    pub test_name: String,
    pub passed: bool,
    pub error_message: Option<String>,
    pub file_path: PathBuf,
}

impl FixtureTestResult {
    fn pass(test_case: &FixtureTestCase) -> Self {
        Self {
            test_name: test_case.name.to_string(),
            passed: true,
            error_message: None,
            file_path: test_case.file_path.clone(),
        }
    }

    fn fail(test_case: &FixtureTestCase, error_message: String) -> Self {
        Self {
            test_name: test_case.name.to_string(),
            passed: false,
            error_message: Some(error_message),
            file_path: test_case.file_path.clone(),
        }
    }
}

/// Collection of fixture test results
#[derive(Debug, Default)]
pub struct FixtureTestResults {
    pub results: Vec<FixtureTestResult>,
}

impl FixtureTestResults {
    pub fn all_passed(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(|r| r.passed)
    }

    pub fn failure_report(&self) -> String {
        let failures: Vec<_> = self.results.iter().filter(|r| !r.passed).collect();
        let failures_len = failures.len();
        let results_len = self.results.len();
        let failures_text = failures
            .iter()
            .map(|r| format_detailed_failure(r))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{failures_len} of {results_len} fixture tests failed:\n\n{failures_text}")
    }

    pub fn summary(&self) -> String {
        let all_passed = self.all_passed();
        let emoji = if all_passed { "✅" } else { "❌" };
        let banner = format!("{emoji} ========================================");
        let header = format!("{emoji} FIXTURE TEST SUMMARY");
        let total = self.results.len();
        let failed = self.results.iter().filter(|r| !r.passed).count();
        let passed = total - failed;

        format!("{banner}\n{header}\n{banner}\nTotal tests: {total}\nPassed: {passed}\nFailed: {failed}\n{banner}")
    }
}

fn format_detailed_failure(result: &FixtureTestResult) -> String {
    let mut output = String::new();
    let test_name = &result.test_name;
    let file_path = result.file_path.display();

    output.push_str(&format!("❌ {test_name}\n"));
    output.push_str(&format!("   File: {file_path}\n"));
    if let Some(msg) = &result.error_message {
        output.push_str(&format!("   {msg}\n"));
    }

    output
}

/// Build the fixture schema, then run every case against it in parallel.
pub fn run_fixture_tests(fixtures_dir: &Path) -> FixtureTestResults {
    let tester = match build_tester(fixtures_dir) {
        Ok(tester) => tester,
        Err(error_message) => return FixtureTestResults {
            results: vec![FixtureTestResult {
                test_name: "schema".to_string(),
                passed: false,
                error_message: Some(error_message),
                file_path: fixtures_dir.join("schema"),
            }],
        },
    };

    let test_cases = FixtureTestCase::discover_all(fixtures_dir);
    log::debug!("Discovered {} fixture case(s)", test_cases.len());

    let results = test_cases
        .par_iter()
        .map(|test_case| match test_case {
            Ok(test_case) => run_test_case(&tester, test_case),
            Err((file_path, e)) => FixtureTestResult {
                test_name: file_path.display().to_string(),
                passed: false,
                error_message: Some(format!("Could not load test case: {e}")),
                file_path: file_path.clone(),
            },
        })
        .collect();

    FixtureTestResults { results }
}

fn build_tester(fixtures_dir: &Path) -> Result<GraphQLTester, String> {
    let documents = fixture_test_case::schema_documents(fixtures_dir)
        .map_err(|e| format!("Could not read schema documents: {e}"))?;

    let mut builder = SchemaBuilder::new();
    for (file_path, content) in documents {
        builder = builder.load_str(Some(file_path), content.as_str())
            .map_err(|e| format!("Expected: Valid schema\nGot: {e}"))?;
    }
    let schema = builder.build()
        .map_err(|e| format!("Expected: Valid schema\nGot: {e}"))?;

    Ok(GraphQLTester::new(schema))
}

fn run_test_case(tester: &GraphQLTester, test_case: &FixtureTestCase) -> FixtureTestResult {
    log::trace!("Running fixture case `{}`", test_case.name);

    let variables = match VariablesBinding::from_json(&test_case.variables) {
        Ok(variables) => variables,
        Err(e) => return FixtureTestResult::fail(test_case, format!("Bad variables: {e}")),
    };
    let operation = test_case.operation.as_str();

    let outcome = tester.test_dynamic(&test_case.is_valid, operation, &variables);
    match (outcome, test_case.expected_error.as_deref()) {
        (Ok(()), None) => FixtureTestResult::pass(test_case),

        // The assertion held because the operation is invalid; make sure it
        // is invalid for the expected reason.
        (Ok(()), Some(pattern)) => match tester.validate(operation, &variables) {
            Err(err) if err.to_string().contains(pattern) => FixtureTestResult::pass(test_case),
            Err(err) => FixtureTestResult::fail(test_case, format!(
                "Expected an error matching: {pattern}\nGot: {err}"
            )),
            Ok(()) => FixtureTestResult::fail(test_case, format!(
                "Expected an error matching: {pattern}\nGot: Operation is valid"
            )),
        },

        (Err(failure), Some(pattern)) if failure.to_string().contains(pattern) =>
            FixtureTestResult::pass(test_case),

        (Err(failure), Some(pattern)) => FixtureTestResult::fail(test_case, format!(
            "Expected a failure matching: {pattern}\nGot: {failure}"
        )),

        (Err(failure), None) => FixtureTestResult::fail(test_case, format!(
            "Expected: Assertion holds\nGot: {failure}"
        )),
    }
}
