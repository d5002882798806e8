//! Configuration schema types
//!
//! This module defines the configuration structure that maps to `casemap.toml`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Main casemap configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseMapConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Case source and normalization settings
    pub dataset: DatasetConfig,

    /// Snapshot feed settings
    #[serde(default)]
    pub feed: FeedConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CaseMapConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.dataset.validate()?;
        self.feed.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Case source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the delimited-text case file
    #[serde(default = "default_dataset_path")]
    pub path: String,

    /// chrono format strings tried in order for date columns
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,

    /// Text the source uses for "no value" in place and coordinate columns
    #[serde(default = "default_unknown_sentinel")]
    pub unknown_sentinel: String,

    /// Country code reported when a nationality has no mapping
    #[serde(default = "default_country_code")]
    pub default_country_code: String,

    /// Extra nationality to country code mappings, checked before the built-in table
    #[serde(default)]
    pub country_code_overrides: BTreeMap<String, String>,
}

impl DatasetConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("dataset.path cannot be empty".to_string());
        }

        if self.date_formats.is_empty() {
            return Err("dataset.date_formats must contain at least one format".to_string());
        }

        if let Some(bad) = self.date_formats.iter().find(|f| !f.contains('%')) {
            return Err(format!(
                "Invalid dataset.date_formats entry '{bad}'. Expected a chrono format string such as \"%d-%b-%y\""
            ));
        }

        if !is_country_code(&self.default_country_code) {
            return Err(format!(
                "Invalid dataset.default_country_code '{}'. Must be a two-letter lowercase code",
                self.default_country_code
            ));
        }

        for (nationality, code) in &self.country_code_overrides {
            if !is_country_code(code) {
                return Err(format!(
                    "Invalid country code '{code}' for nationality '{nationality}' in dataset.country_code_overrides"
                ));
            }
        }

        Ok(())
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            date_formats: default_date_formats(),
            unknown_sentinel: default_unknown_sentinel(),
            default_country_code: default_country_code(),
            country_code_overrides: BTreeMap::new(),
        }
    }
}

fn is_country_code(code: &str) -> bool {
    code.len() == 2 && code.chars().all(|c| c.is_ascii_lowercase())
}

/// Snapshot feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Minimum time between two derived snapshots, in milliseconds
    #[serde(default = "default_min_refresh_interval_ms")]
    pub min_refresh_interval_ms: u64,
}

impl FeedConfig {
    fn validate(&self) -> Result<(), String> {
        if self.min_refresh_interval_ms > 60_000 {
            return Err(format!(
                "feed.min_refresh_interval_ms must be <= 60000, got {}",
                self.min_refresh_interval_ms
            ));
        }
        Ok(())
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            min_refresh_interval_ms: default_min_refresh_interval_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_dataset_path() -> String {
    "data/cases.csv".to_string()
}

pub(crate) fn default_date_formats() -> Vec<String> {
    vec![
        "%d-%b-%y".to_string(),
        "%d %b %y".to_string(),
        "%d %B %y".to_string(),
        "%Y-%m-%d".to_string(),
    ]
}

fn default_unknown_sentinel() -> String {
    "Unknown".to_string()
}

fn default_country_code() -> String {
    "sg".to_string()
}

fn default_min_refresh_interval_ms() -> u64 {
    250
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CaseMapConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_application_log_level_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("Invalid log_level 'verbose'"));
    }

    #[test]
    fn test_dataset_config_validation() {
        let mut config = DatasetConfig::default();
        assert!(config.validate().is_ok());

        config.path = "  ".to_string();
        assert!(config.validate().is_err());

        config.path = "cases.csv".to_string();
        config.date_formats = vec![];
        assert!(config.validate().is_err());

        config.date_formats = vec!["dd-MMM-yy".to_string()];
        assert!(config.validate().is_err());

        config.date_formats = default_date_formats();
        config.default_country_code = "SGP".to_string();
        assert!(config.validate().is_err());

        config.default_country_code = "sg".to_string();
        config
            .country_code_overrides
            .insert("Wuhan".to_string(), "CN".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_feed_config_validation() {
        let mut config = FeedConfig::default();
        assert_eq!(config.min_refresh_interval_ms, 250);
        assert!(config.validate().is_ok());

        config.min_refresh_interval_ms = 0;
        assert!(config.validate().is_ok());

        config.min_refresh_interval_ms = 120_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert!(!config.local_enabled);
        assert_eq!(config.local_path, "logs");
        assert_eq!(config.local_rotation, "daily");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_config_invalid_rotation() {
        let config = LoggingConfig {
            local_rotation: "size".to_string(),
            ..LoggingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_log_level(), "info");
        assert_eq!(default_dataset_path(), "data/cases.csv");
        assert_eq!(default_unknown_sentinel(), "Unknown");
        assert_eq!(default_country_code(), "sg");
        assert_eq!(default_date_formats().len(), 4);
    }
}
