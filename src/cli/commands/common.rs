//! Shared setup for the dataset commands

use crate::adapters::create_case_source;
use crate::config::{load_config_or_default, CaseMapConfig};
use crate::core::dataset::{CaseDataset, CaseStore};
use chrono::NaiveDate;
use std::sync::Arc;

/// Exit code for configuration errors
pub(crate) const EXIT_CONFIG: i32 = 2;
/// Exit code for unreadable or malformed case data
pub(crate) const EXIT_DATA: i32 = 3;

/// Configuration plus the loaded dataset
pub(crate) struct Loaded {
    pub config: CaseMapConfig,
    pub dataset: Arc<CaseDataset>,
}

/// Loads configuration and the case data, printing failures
///
/// On failure returns the process exit code to use.
pub(crate) async fn load_dataset(config_path: &str, data: Option<&str>) -> Result<Loaded, i32> {
    let mut config = match load_config_or_default(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Failed to load configuration file");
            eprintln!("   Error: {e}");
            return Err(EXIT_CONFIG);
        }
    };

    if let Some(path) = data {
        tracing::info!(path = %path, "Overriding case data path from CLI");
        config.dataset.path = path.to_string();
    }

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Configuration validation failed");
        eprintln!("Configuration validation failed: {e}");
        return Err(EXIT_CONFIG);
    }

    let source = create_case_source(&config.dataset);
    let store = CaseStore::new();
    let dataset = match store.load(source.as_ref(), &config.dataset).await {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!(error = %e, "Case data load failed");
            eprintln!("❌ Failed to load case data from {}", config.dataset.path);
            eprintln!("   Error: {e}");
            return Err(EXIT_DATA);
        }
    };

    let report = dataset.report();
    if report.skipped_count() > 0 {
        eprintln!(
            "⚠️  Skipped {} of {} rows with invalid required fields or repeated case numbers",
            report.skipped_count(),
            report.rows_read
        );
    }
    if report.resorted {
        eprintln!("⚠️  Source was not sorted by confirmed date and was re-sorted");
    }

    Ok(Loaded { config, dataset })
}

/// The requested cutoff, or the last confirmed date when none was given
pub(crate) fn cutoff_or_latest(dataset: &CaseDataset, as_of: Option<NaiveDate>) -> Option<NaiveDate> {
    as_of.or(dataset.bounds().last_date)
}

/// Renders a bar `ratio` of `width` characters long
pub(crate) fn bar(ratio: f64, width: usize) -> String {
    "█".repeat((ratio * width as f64).round() as usize)
}
