//! Integration tests for file logging.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: when using file mode, the directory of the log file (default "./logs")
//!   Refer to `src/logging/mod.rs` for more details.
use chrono::Utc;
use std::{env, fs, path::Path, sync::Mutex};
use tempfile::TempDir;
use webhook_dispatcher::logging::{compute_rolled_file_path, setup_logging, space_based_rolling};

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn compute_final_log_path(base_file_path: &str, date_str: &str, max_size: u64) -> String {
    let dated_path = compute_rolled_file_path(base_file_path, date_str, 1);
    space_based_rolling(&dated_path, base_file_path, date_str, max_size)
}

// This test checks that an invalid LOG_MAX_SIZE is rejected before any
// logger state is touched.
#[test]
#[should_panic(expected = "LOG_MAX_SIZE must be a valid u64 if set")]
fn test_invalid_log_max_size() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_log_dir = temp_dir.path().to_str().expect("temp dir path");

    env::set_var("LOG_MODE", "file");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("LOG_DATA_DIR", format!("{}/", temp_log_dir));
    env::set_var("LOG_MAX_SIZE", "invalid_value");

    setup_logging();
}

// Simulates file logging end to end: file mode must create the dated log
// file under the configured directory.
#[test]
fn test_setup_logging_file_mode_creates_log_file() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_log_dir = temp_dir.path().to_str().expect("temp dir path");

    env::remove_var("LOG_MAX_SIZE");
    env::set_var("LOG_MODE", "file");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("LOG_DATA_DIR", format!("{}/", temp_log_dir));

    setup_logging();

    let date_str = Utc::now().format("%Y-%m-%d").to_string();
    let base_file_path = format!("{}/dispatcher.log", temp_log_dir.trim_end_matches('/'));
    let expected_path = compute_final_log_path(&base_file_path, &date_str, 1_073_741_824);

    assert!(
        Path::new(&expected_path).exists(),
        "expected log file at {}",
        expected_path
    );

    // The file is fresh, so it must be under any reasonable rolling size.
    let metadata = fs::metadata(&expected_path).expect("log file metadata");
    assert!(metadata.len() < 1024 * 1024);

    env::remove_var("LOG_MODE");
    env::remove_var("LOG_LEVEL");
    env::remove_var("LOG_DATA_DIR");
}
