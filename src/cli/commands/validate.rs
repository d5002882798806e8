//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the casemap configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing, so a parse or a validation
        // failure both land here
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Case Data: {}", config.dataset.path);
        println!("  Date Formats: {:?}", config.dataset.date_formats);
        println!("  Unknown Sentinel: {}", config.dataset.unknown_sentinel);
        println!("  Default Country Code: {}", config.dataset.default_country_code);
        println!(
            "  Country Code Overrides: {}",
            config.dataset.country_code_overrides.len()
        );
        println!(
            "  Feed Refresh Interval: {} ms",
            config.feed.min_refresh_interval_ms
        );
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_valid_config_exits_zero() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[dataset]\npath = \"cases.csv\"").unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_invalid_config_exits_two() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[dataset]\npath = \"cases.csv\"\ndefault_country_code = \"SGP\"").unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_missing_config_exits_two() {
        let code = ValidateArgs {}
            .execute("/nonexistent/casemap.toml")
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
