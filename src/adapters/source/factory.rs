//! Case source factory

use crate::adapters::csv::CsvFileSource;
use crate::adapters::source::traits::CaseSource;
use crate::config::DatasetConfig;
use std::sync::Arc;

/// Create the case source described by the dataset configuration
///
/// Only delimited-text files are supported; the path's extension is not
/// checked.
pub fn create_case_source(config: &DatasetConfig) -> Arc<dyn CaseSource> {
    tracing::debug!(path = %config.path, "Creating CSV case source");
    Arc::new(CsvFileSource::new(&config.path)) as Arc<dyn CaseSource>
}
