use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::filter::LevelFilter;

/// Check if a path's extension matches the given extension (case-insensitive)
pub fn extension_matches_ignore_case(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

pub fn get_fixtures_dir() -> &'static Path {
    static FIXTURES_DIR: OnceLock<PathBuf> = OnceLock::new();
    FIXTURES_DIR.get_or_init(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/test/fixture_tests/fixtures")
    })
}

/// Route `log` output to the test harness. Quiet unless `LOG_LEVEL` asks
/// for more.
pub fn init_test_logging() {
    let log_level =
        match std::env::var("LOG_LEVEL").map(|s| s.trim().to_string()).as_deref() {
            Ok("DEBUG" | "debug") => LevelFilter::DEBUG,
            Ok("INFO" | "info") => LevelFilter::INFO,
            Ok("TRACE" | "trace") => LevelFilter::TRACE,
            _ => LevelFilter::WARN,
        };

    // Another test may have installed the global subscriber already.
    let _ = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_test_writer()
        .try_init();
}
