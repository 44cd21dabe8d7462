use super::utils;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// One operation (plus variables and expectation) loaded from a JSON file.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureTestCase {
    #[serde(skip)]
    pub name: String,
    #[serde(skip)]
    pub file_path: PathBuf,
    pub is_valid: serde_json::Value,
    pub operation: String,
    #[serde(default)]
    pub variables: serde_json::Value,
    pub expected_error: Option<String>,
}

impl FixtureTestCase {
    /// Load every `*.json` case under `{fixtures_dir}/cases`, sorted by name.
    /// A file that can not be read or deserialized is returned as an `Err`
    /// so it is reported as a failed case rather than silently skipped.
    pub fn discover_all(fixtures_dir: &Path) -> Vec<Result<Self, (PathBuf, String)>> {
        let cases_dir = fixtures_dir.join("cases");
        let mut case_paths = match fs::read_dir(&cases_dir) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|path| utils::extension_matches_ignore_case(path, "json"))
                .collect::<Vec<_>>(),
            Err(e) => return vec![Err((cases_dir, e.to_string()))],
        };
        case_paths.sort();

        case_paths.into_iter().map(Self::load).collect()
    }

    fn load(file_path: PathBuf) -> Result<Self, (PathBuf, String)> {
        let content = match fs::read_to_string(&file_path) {
            Ok(content) => content,
            Err(e) => return Err((file_path, e.to_string())),
        };
        let mut test_case: Self = match serde_json::from_str(&content) {
            Ok(test_case) => test_case,
            Err(e) => return Err((file_path, e.to_string())),
        };

        test_case.name = file_path.file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("<unnamed>")
            .to_string();
        test_case.file_path = file_path;
        Ok(test_case)
    }
}

/// Load every `*.graphql` document under `{fixtures_dir}/schema`, sorted by
/// name.
pub fn schema_documents(fixtures_dir: &Path) -> std::io::Result<Vec<(PathBuf, String)>> {
    let mut schema_paths = fs::read_dir(fixtures_dir.join("schema"))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| utils::extension_matches_ignore_case(path, "graphql"))
        .collect::<Vec<_>>();
    schema_paths.sort();

    schema_paths.into_iter()
        .map(|path| fs::read_to_string(&path).map(|content| (path, content)))
        .collect()
}
