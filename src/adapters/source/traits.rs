//! Case source trait
//!
//! A case source yields the raw rows of the dataset. The dataset layer only
//! ever reads through this trait, so tests can substitute in-memory sources.

use crate::core::normalize::RawCaseRow;
use crate::domain::Result;
use async_trait::async_trait;

/// Provider of raw case rows
#[async_trait]
pub trait CaseSource: Send + Sync {
    /// Name used in logs and the load report
    fn name(&self) -> &str;

    /// Read every row of the source
    ///
    /// Rows carry their 1-based source line number. Per-row problems are not
    /// errors here; they surface later as skipped rows during normalization.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::DatasetError`] wrapped in a `CaseMapError`
    /// when the source cannot be read, cannot be parsed as delimited text, or
    /// is missing a required column.
    async fn read_rows(&self) -> Result<Vec<RawCaseRow>>;
}
