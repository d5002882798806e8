//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold ENV_MUTEX to avoid
//! interfering with each other.

use casemap::config::{load_config, load_config_or_default};
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("CASEMAP_APPLICATION_LOG_LEVEL");
    std::env::remove_var("CASEMAP_DATASET_PATH");
    std::env::remove_var("CASEMAP_DATASET_DATE_FORMATS");
    std::env::remove_var("CASEMAP_DATASET_DEFAULT_COUNTRY_CODE");
    std::env::remove_var("CASEMAP_FEED_MIN_REFRESH_INTERVAL_MS");
    std::env::remove_var("CASEMAP_LOGGING_LOCAL_ROTATION");
    std::env::remove_var("TEST_CASEMAP_DATA_DIR");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[dataset]
path = "/srv/data/ncovid-2019-sgp.csv"
date_formats = ["%d-%b-%y", "%d %B %y"]
unknown_sentinel = "-"
default_country_code = "sg"

[dataset.country_code_overrides]
"Wuhan Evacuee" = "cn"
"Singapore PR" = "sg"

[feed]
min_refresh_interval_ms = 100

[logging]
local_enabled = true
local_path = "/tmp/casemap"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.dataset.path, "/srv/data/ncovid-2019-sgp.csv");
    assert_eq!(config.dataset.date_formats, vec!["%d-%b-%y", "%d %B %y"]);
    assert_eq!(config.dataset.unknown_sentinel, "-");
    assert_eq!(config.dataset.country_code_overrides.len(), 2);
    assert_eq!(
        config.dataset.country_code_overrides.get("Wuhan Evacuee").map(String::as_str),
        Some("cn")
    );
    assert_eq!(config.feed.min_refresh_interval_ms, 100);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config("[dataset]\npath = \"cases.csv\"\n");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.dataset.date_formats.len(), 4);
    assert_eq!(config.dataset.unknown_sentinel, "Unknown");
    assert_eq!(config.dataset.default_country_code, "sg");
    assert_eq!(config.feed.min_refresh_interval_ms, 250);
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_CASEMAP_DATA_DIR", "/mnt/line-lists");

    let file = write_config(
        "# data lives in ${NOT_SUBSTITUTED_IN_COMMENTS}\n[dataset]\npath = \"${TEST_CASEMAP_DATA_DIR}/cases.csv\"\n",
    );
    let result = load_config(file.path());
    cleanup_env_vars();

    let config = result.unwrap();
    assert_eq!(config.dataset.path, "/mnt/line-lists/cases.csv");
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config("[dataset]\npath = \"${TEST_CASEMAP_DATA_DIR}/cases.csv\"\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_CASEMAP_DATA_DIR"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("CASEMAP_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("CASEMAP_DATASET_PATH", "/override/cases.csv");
    std::env::set_var("CASEMAP_DATASET_DATE_FORMATS", "%d/%m/%Y; %Y-%m-%d");
    std::env::set_var("CASEMAP_FEED_MIN_REFRESH_INTERVAL_MS", "40");

    let file = write_config("[dataset]\npath = \"cases.csv\"\n");
    let result = load_config(file.path());
    cleanup_env_vars();

    let config = result.unwrap();
    assert_eq!(config.application.log_level, "trace");
    assert_eq!(config.dataset.path, "/override/cases.csv");
    assert_eq!(config.dataset.date_formats, vec!["%d/%m/%Y", "%Y-%m-%d"]);
    assert_eq!(config.feed.min_refresh_interval_ms, 40);
}

#[test]
fn test_invalid_env_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("CASEMAP_FEED_MIN_REFRESH_INTERVAL_MS", "soon");

    let file = write_config("[dataset]\npath = \"cases.csv\"\n");
    let result = load_config(file.path());
    cleanup_env_vars();

    assert!(result.is_err());
}

#[test]
fn test_invalid_config_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let cases = [
        "[dataset]\npath = \"\"\n",
        "[dataset]\npath = \"cases.csv\"\ndate_formats = []\n",
        "[dataset]\npath = \"cases.csv\"\ndate_formats = [\"dd-mm-yy\"]\n",
        "[dataset]\npath = \"cases.csv\"\ndefault_country_code = \"SG\"\n",
        "[dataset]\npath = \"cases.csv\"\n[dataset.country_code_overrides]\nChina = \"chn\"\n",
        "[dataset]\npath = \"cases.csv\"\n[feed]\nmin_refresh_interval_ms = 600000\n",
        "[dataset]\npath = \"cases.csv\"\n[logging]\nlocal_rotation = \"size\"\n",
        "[application]\nlog_level = \"verbose\"\n[dataset]\npath = \"cases.csv\"\n",
    ];
    for contents in cases {
        let file = write_config(contents);
        assert!(load_config(file.path()).is_err(), "accepted: {contents}");
    }
}

#[test]
fn test_missing_config_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    assert!(load_config("/nonexistent/casemap.toml").is_err());

    let config = load_config_or_default("/nonexistent/casemap.toml").unwrap();
    assert_eq!(config.dataset.path, "data/cases.csv");
}
