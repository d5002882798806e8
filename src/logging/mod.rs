//! Logging and observability
//!
//! Structured logging through `tracing`, with a console layer and an optional
//! rolling JSON file layer.
//!
//! # Example
//!
//! ```no_run
//! use casemap::logging::init_logging;
//! use casemap::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(records = 120, "Case data loaded");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the completion of the one-time case load
///
/// # Example
///
/// ```no_run
/// use casemap::log_load_complete;
/// use std::time::Duration;
///
/// log_load_complete!("cases.csv", 120, 3, Duration::from_millis(18));
/// ```
#[macro_export]
macro_rules! log_load_complete {
    ($source:expr, $accepted:expr, $skipped:expr, $duration:expr) => {
        tracing::info!(
            source = %$source,
            accepted = $accepted,
            skipped = $skipped,
            duration_ms = $duration.as_millis(),
            "Case data loaded"
        );
    };
}

/// Log a derived snapshot
///
/// # Example
///
/// ```no_run
/// use casemap::log_snapshot_derived;
///
/// let cutoff = chrono::NaiveDate::from_ymd_opt(2020, 2, 10).unwrap();
/// log_snapshot_derived!(cutoff, 43);
/// ```
#[macro_export]
macro_rules! log_snapshot_derived {
    ($cutoff:expr, $size:expr) => {
        tracing::debug!(cutoff = %$cutoff, size = $size, "Snapshot derived");
    };
}

/// Log a data-quality finding that was corrected to a safe default
///
/// # Example
///
/// ```no_run
/// use casemap::log_data_quality;
///
/// log_data_quality!("unmapped_nationality", "Atlantis", "using default country code");
/// ```
#[macro_export]
macro_rules! log_data_quality {
    ($kind:expr, $subject:expr, $message:expr) => {
        tracing::warn!(
            kind = $kind,
            subject = %$subject,
            "Data quality: {}",
            $message
        );
    };
}
