//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "casemap.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing casemap configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Point dataset.path at your case line-list CSV");
                println!("  2. Validate configuration: casemap validate-config");
                println!("  3. Check the data loads: casemap bounds");
                println!("  4. Explore a day: casemap snapshot --as-of 2020-02-10");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate the sample configuration
    pub(crate) fn generate_config() -> String {
        r#"# casemap Configuration File
# Point-in-time snapshots over a case line list

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[dataset]
# CSV with one header row; CASE_NUMBER, CONFIRMED_DATE and AGE are required
path = "data/cases.csv"

# chrono format strings, tried in order
date_formats = ["%d-%b-%y", "%d %b %y", "%d %B %y", "%Y-%m-%d"]

# Placeholder meaning "not known" in location and date columns
unknown_sentinel = "Unknown"

# ISO 3166-1 alpha-2 code used when a nationality has no mapping
default_country_code = "sg"

# Extra nationality to country code mappings
[dataset.country_code_overrides]
# "Wuhan Evacuee" = "cn"

[feed]
# Minimum time between two derived snapshots while the cutoff moves
min_refresh_interval_ms = 250

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"  # daily | hourly | never
"#
        .to_string()
    }
}
