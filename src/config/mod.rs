//! Configuration management for casemap.
//!
//! casemap uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CASEMAP_<SECTION>_<KEY>` environment overrides
//! - Default values for every optional setting
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [dataset]
//! path = "${CASEMAP_DATA_DIR}/ncovid-2019-sgp.csv"
//! date_formats = ["%d-%b-%y", "%d %B %y"]
//! default_country_code = "sg"
//!
//! [dataset.country_code_overrides]
//! "Singapore PR" = "sg"
//!
//! [feed]
//! min_refresh_interval_ms = 250
//!
//! [logging]
//! local_enabled = false
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use casemap::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("casemap.toml")?;
//! println!("Case source: {}", config.dataset.path);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, parse_config};
pub use schema::{ApplicationConfig, CaseMapConfig, DatasetConfig, FeedConfig, LoggingConfig};
