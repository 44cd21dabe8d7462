//! File-based tests that run every operation under `fixtures/cases/` against
//! the schema documents under `fixtures/schema/`.
//!
//! Each case is a JSON object:
//!
//! * `isValid`: the expectation handed to
//!   [`GraphQLTester::test_dynamic`](crate::GraphQLTester::test_dynamic).
//!   Deliberately untyped so that non-boolean expectations can be exercised.
//! * `operation`: the operation text.
//! * `variables` (optional): a JSON object of variable values.
//! * `expectedError` (optional): a substring of the message the case must
//!   produce. When the assertion itself fails, the failure message is
//!   matched. When it holds because the operation is invalid (as expected),
//!   the validation error is matched instead.

mod fixture_test_case;
mod test_runner;
mod utils;

#[test]
fn verify_fixture_cases() {
    utils::init_test_logging();

    let fixtures_dir = utils::get_fixtures_dir();
    let results = test_runner::run_fixture_tests(fixtures_dir);

    if !results.all_passed() {
        eprintln!("{}", results.failure_report());
        eprintln!("\n{}", results.summary());
    } else {
        println!("{}", results.summary());
    }

    assert!(
        results.all_passed(),
        "Fixture tests failed:\n{}",
        results.failure_report()
    );
}
