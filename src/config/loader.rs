//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::CaseMapConfig;
use crate::domain::errors::CaseMapError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CaseMapConfig
/// 4. Applies environment variable overrides (CASEMAP_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use casemap::config::loader::load_config;
///
/// let config = load_config("casemap.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CaseMapConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CaseMapError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CaseMapError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Loads configuration from a TOML file, falling back to defaults when the
/// file does not exist
///
/// Environment overrides and validation still apply to the defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<CaseMapConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(
        config_path = %path.display(),
        "Configuration file not found, using defaults"
    );
    let mut config = CaseMapConfig::default();
    apply_env_overrides(&mut config)?;
    config.validate().map_err(|e| {
        CaseMapError::Configuration(format!("Configuration validation failed: {e}"))
    })?;
    Ok(config)
}

/// Parses configuration from TOML text
///
/// Performs the same substitution, override and validation steps as
/// [`load_config`].
pub fn parse_config(contents: &str) -> Result<CaseMapConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: CaseMapConfig = toml::from_str(&contents)
        .map_err(|e| CaseMapError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        CaseMapError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| CaseMapError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        // Comment lines are copied through untouched
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(CaseMapError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using CASEMAP_* prefix
///
/// Environment variables follow the pattern: CASEMAP_<SECTION>_<KEY>
/// For example: CASEMAP_DATASET_PATH, CASEMAP_FEED_MIN_REFRESH_INTERVAL_MS
fn apply_env_overrides(config: &mut CaseMapConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("CASEMAP_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Dataset overrides
    if let Ok(val) = std::env::var("CASEMAP_DATASET_PATH") {
        config.dataset.path = val;
    }
    if let Ok(val) = std::env::var("CASEMAP_DATASET_DATE_FORMATS") {
        config.dataset.date_formats = val
            .split(';')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();
    }
    if let Ok(val) = std::env::var("CASEMAP_DATASET_UNKNOWN_SENTINEL") {
        config.dataset.unknown_sentinel = val;
    }
    if let Ok(val) = std::env::var("CASEMAP_DATASET_DEFAULT_COUNTRY_CODE") {
        config.dataset.default_country_code = val;
    }

    // Feed overrides
    if let Ok(val) = std::env::var("CASEMAP_FEED_MIN_REFRESH_INTERVAL_MS") {
        let interval = val.parse().map_err(|_| {
            CaseMapError::Configuration(format!(
                "CASEMAP_FEED_MIN_REFRESH_INTERVAL_MS must be an integer, got '{val}'"
            ))
        })?;
        config.feed.min_refresh_interval_ms = interval;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("CASEMAP_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("CASEMAP_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("CASEMAP_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("CASEMAP_UNIT_TEST_PATH", "/srv/cases.csv");
        let input = "path = \"${CASEMAP_UNIT_TEST_PATH}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "path = \"/srv/cases.csv\"\n");
        std::env::remove_var("CASEMAP_UNIT_TEST_PATH");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("CASEMAP_UNIT_TEST_MISSING");
        let input = "path = \"${CASEMAP_UNIT_TEST_MISSING}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# path = \"${CASEMAP_UNIT_TEST_IN_COMMENT}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${CASEMAP_UNIT_TEST_IN_COMMENT}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-casemap.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default("nonexistent-casemap.toml").unwrap();
        assert_eq!(config.dataset.default_country_code, "sg");
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[dataset]
path = "fixtures/sg-cases.csv"
date_formats = ["%d-%b-%y"]

[dataset.country_code_overrides]
"Wuhan Resident" = "cn"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.dataset.path, "fixtures/sg-cases.csv");
        assert_eq!(config.dataset.date_formats, vec!["%d-%b-%y".to_string()]);
        assert_eq!(
            config.dataset.country_code_overrides.get("Wuhan Resident"),
            Some(&"cn".to_string())
        );
        assert_eq!(config.feed.min_refresh_interval_ms, 250);
    }

    #[test]
    fn test_parse_config_rejects_invalid_values() {
        let toml_content = r#"
[dataset]
path = "cases.csv"
default_country_code = "Singapore"
"#;
        let err = parse_config(toml_content).unwrap_err();
        assert!(err.to_string().contains("default_country_code"));
    }
}
