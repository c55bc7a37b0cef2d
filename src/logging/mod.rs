//! Logging setup, driven by environment variables.
//!
//! - `LOG_MODE`: "stdout" (default) or "file"
//! - `LOG_LEVEL`: "trace", "debug", "info" (default), "warn" or "error"
//! - `LOG_DATA_DIR`: directory of the log file in file mode (default "./logs")
//! - `LOG_MAX_SIZE`: size in bytes after which a new log file is started
//!   (default 1GB)

use chrono::Utc;
use log::info;
use simplelog::{Config, LevelFilter, SimpleLogger, WriteLogger};
use std::{
    env,
    fs::{create_dir_all, metadata, File, OpenOptions},
    path::Path,
};

/// Computes the rolled log file path for a given date and sequence index.
pub fn compute_rolled_file_path(base_file_path: &str, date_str: &str, index: u32) -> String {
    match base_file_path.strip_suffix(".log") {
        Some(trimmed) => format!("{}-{}.{}.log", trimmed, date_str, index),
        None => format!("{}-{}.{}.log", base_file_path, date_str, index),
    }
}

/// Walks the sequence indices until it finds a log file under `max_size`
/// bytes (or one that does not exist yet) and returns that path.
pub fn space_based_rolling(
    file_path: &str,
    base_file_path: &str,
    date_str: &str,
    max_size: u64,
) -> String {
    let mut final_path = file_path.to_string();
    let mut index = 1;
    while let Ok(file_metadata) = metadata(&final_path) {
        if file_metadata.len() <= max_size {
            break;
        }
        final_path = compute_rolled_file_path(base_file_path, date_str, index);
        index += 1;
    }
    final_path
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Sets up logging by reading configuration from environment variables.
pub fn setup_logging() {
    let log_mode = env::var("LOG_MODE").unwrap_or_else(|_| "stdout".to_string());
    let level_filter = parse_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

    if log_mode.to_lowercase() == "file" {
        let log_dir = env::var("LOG_DATA_DIR").unwrap_or_else(|_| "./logs".to_string());
        let log_dir = format!("{}/", log_dir.trim_end_matches('/'));
        let base_file_path = format!("{}dispatcher.log", log_dir);

        // Time-based rolling: one file name per UTC date.
        let date_str = Utc::now().format("%Y-%m-%d").to_string();
        let dated_path = compute_rolled_file_path(&base_file_path, &date_str, 1);

        if let Some(parent) = Path::new(&dated_path).parent() {
            create_dir_all(parent).expect("Failed to create log directory");
        }

        let max_size: u64 = env::var("LOG_MAX_SIZE")
            .map(|s| {
                s.parse::<u64>()
                    .expect("LOG_MAX_SIZE must be a valid u64 if set")
            })
            .unwrap_or(1_073_741_824);

        let final_path = space_based_rolling(&dated_path, &base_file_path, &date_str, max_size);

        // Append when the chosen file exists and is under the threshold.
        let log_file = if Path::new(&final_path).exists() {
            OpenOptions::new()
                .append(true)
                .open(&final_path)
                .unwrap_or_else(|e| panic!("Unable to open log file {}: {}", final_path, e))
        } else {
            File::create(&final_path)
                .unwrap_or_else(|e| panic!("Unable to create log file {}: {}", final_path, e))
        };
        WriteLogger::init(level_filter, Config::default(), log_file)
            .expect("Failed to initialize file logger");
    } else {
        SimpleLogger::init(level_filter, Config::default())
            .expect("Failed to initialize simple logger");
    }

    info!("Logging is successfully configured (mode: {})", log_mode);
}
