//! Loaded case dataset
//!
//! [`CaseDataset`] owns the normalized, date-sorted record set and answers
//! every read operation. It is immutable after construction and can be shared
//! across tasks behind an `Arc`. [`CaseStore`] wraps the one-time async load.

use crate::adapters::CaseSource;
use crate::config::DatasetConfig;
use crate::core::aggregate::{aggregate, Aggregates, CountryCodes};
use crate::core::geo::{resolve_points, ResolvedPoints};
use crate::core::normalize::{Normalizer, RawCaseRow, SeenCaseNumbers, SkippedRow};
use crate::core::snapshot::Snapshot;
use crate::core::timeline::{cutoff_from_millis, TemporalBounds};
use crate::domain::{CaseMapError, CaseNumber, CaseRecord, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;

/// A recorded date that falls before the case's confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateAnomaly {
    pub case_number: CaseNumber,
    pub field: &'static str,
    pub date: NaiveDate,
    pub confirmed_date: NaiveDate,
}

/// Outcome of building a dataset from a source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub source: String,
    pub rows_read: usize,
    pub accepted: usize,
    pub skipped: Vec<SkippedRow>,
    /// The source was not sorted by confirmed date and was re-sorted
    pub resorted: bool,
    pub anomalies: Vec<DateAnomaly>,
}

impl LoadReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Everything derived for one cutoff
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotView {
    pub cutoff: NaiveDate,
    pub aggregates: Aggregates,
    pub points: ResolvedPoints,
}

/// Immutable, date-sorted case records with their temporal bounds
#[derive(Debug, Clone)]
pub struct CaseDataset {
    records: Vec<CaseRecord>,
    bounds: TemporalBounds,
    country_codes: CountryCodes,
    report: LoadReport,
}

impl CaseDataset {
    /// Normalizes `rows` and builds the dataset
    ///
    /// Malformed rows are excluded and listed in the [`LoadReport`]. A source
    /// not sorted by confirmed date is stably re-sorted.
    pub fn from_rows(rows: &[RawCaseRow], config: &DatasetConfig) -> Self {
        Self::from_source_rows("memory", rows, config)
    }

    pub(crate) fn from_source_rows(source: &str, rows: &[RawCaseRow], config: &DatasetConfig) -> Self {
        let normalized = Normalizer::from_config(config).normalize_rows(rows);
        Self::assemble(source, rows.len(), normalized.records, normalized.skipped, config)
    }

    /// Builds a dataset from records that are already normalized
    ///
    /// Repeated case numbers are skipped the same way as for source rows,
    /// reported by their 1-based position in `records`.
    pub fn from_records(records: Vec<CaseRecord>, config: &DatasetConfig) -> Self {
        let rows_read = records.len();
        let mut seen = SeenCaseNumbers::default();
        let mut accepted = Vec::with_capacity(rows_read);
        let mut skipped = Vec::new();

        for (position, record) in (1u64..).zip(records) {
            match seen.claim(record.case_number, position) {
                Ok(()) => accepted.push(record),
                Err(error) => skipped.push(SkippedRow {
                    line: position,
                    error,
                }),
            }
        }

        Self::assemble("memory", rows_read, accepted, skipped, config)
    }

    /// Orders accepted records by confirmed date and reports what was found
    fn assemble(
        source: &str,
        rows_read: usize,
        mut records: Vec<CaseRecord>,
        skipped: Vec<SkippedRow>,
        config: &DatasetConfig,
    ) -> Self {
        let resorted = !is_sorted_by_confirmed(&records);
        if resorted {
            tracing::warn!(
                source,
                "Source is not sorted by confirmed date, re-sorting"
            );
            records.sort_by_key(|record| record.confirmed_date);
        }

        let anomalies = find_date_anomalies(&records);
        for anomaly in &anomalies {
            crate::log_data_quality!(
                "date_before_confirmation",
                anomaly.case_number,
                format!(
                    "{} {} is before confirmed date {}",
                    anomaly.field, anomaly.date, anomaly.confirmed_date
                )
            );
        }

        let report = LoadReport {
            source: source.to_string(),
            rows_read,
            accepted: records.len(),
            skipped,
            resorted,
            anomalies,
        };
        let bounds = TemporalBounds::from_records(&records);
        Self {
            records,
            bounds,
            country_codes: CountryCodes::from_config(config),
            report,
        }
    }

    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn country_codes(&self) -> &CountryCodes {
        &self.country_codes
    }

    /// Temporal bounds over the full, unfiltered record set
    pub fn bounds(&self) -> TemporalBounds {
        self.bounds
    }

    /// Records confirmed on or before `cutoff`
    pub fn snapshot(&self, cutoff: NaiveDate) -> Snapshot<'_> {
        let snapshot = Snapshot::take(&self.records, cutoff);
        crate::log_snapshot_derived!(cutoff, snapshot.len());
        snapshot
    }

    /// Snapshot at a cutoff given in UTC epoch milliseconds
    ///
    /// # Errors
    ///
    /// Returns [`CaseMapError::Validation`] when `millis` is outside the
    /// representable date range.
    pub fn snapshot_at_millis(&self, millis: i64) -> Result<Snapshot<'_>> {
        let cutoff = cutoff_from_millis(millis).ok_or_else(|| {
            CaseMapError::Validation(format!("Cutoff {millis} ms is out of range"))
        })?;
        Ok(self.snapshot(cutoff))
    }

    /// Snapshot of the whole dataset
    pub fn latest(&self) -> Snapshot<'_> {
        match self.bounds.last_date {
            Some(last) => self.snapshot(last),
            None => Snapshot::take(&self.records, NaiveDate::MIN),
        }
    }

    pub fn aggregates(&self, snapshot: &Snapshot<'_>) -> Aggregates {
        aggregate(snapshot, &self.country_codes)
    }

    pub fn resolve_points(&self, snapshot: &Snapshot<'_>) -> ResolvedPoints {
        resolve_points(snapshot)
    }

    /// Derives aggregates and points for `cutoff`
    pub fn view(&self, cutoff: NaiveDate) -> SnapshotView {
        let snapshot = self.snapshot(cutoff);
        SnapshotView {
            cutoff,
            aggregates: self.aggregates(&snapshot),
            points: self.resolve_points(&snapshot),
        }
    }
}

fn is_sorted_by_confirmed(records: &[CaseRecord]) -> bool {
    records
        .windows(2)
        .all(|pair| pair[0].confirmed_date <= pair[1].confirmed_date)
}

fn find_date_anomalies(records: &[CaseRecord]) -> Vec<DateAnomaly> {
    let mut anomalies = Vec::new();
    for record in records {
        for (field, date) in [
            ("discharge_date", record.discharge_date),
            ("death_date", record.death_date),
        ] {
            if let Some(date) = date.filter(|date| *date < record.confirmed_date) {
                anomalies.push(DateAnomaly {
                    case_number: record.case_number,
                    field,
                    date,
                    confirmed_date: record.confirmed_date,
                });
            }
        }
    }
    anomalies
}

/// Holds the dataset once the one-time load has resolved
#[derive(Debug, Default)]
pub struct CaseStore {
    dataset: OnceCell<Arc<CaseDataset>>,
}

impl CaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `source` once and publishes the dataset
    ///
    /// # Errors
    ///
    /// Returns [`CaseMapError::AlreadyLoaded`] on a second call, or the
    /// source's error when it cannot be read.
    pub async fn load(
        &self,
        source: &dyn CaseSource,
        config: &DatasetConfig,
    ) -> Result<Arc<CaseDataset>> {
        if self.dataset.initialized() {
            return Err(CaseMapError::AlreadyLoaded);
        }

        let started = Instant::now();
        tracing::info!(source = source.name(), "Loading case data");
        let rows = source.read_rows().await?;
        let dataset = Arc::new(CaseDataset::from_source_rows(source.name(), &rows, config));

        self.dataset
            .set(Arc::clone(&dataset))
            .map_err(|_| CaseMapError::AlreadyLoaded)?;

        crate::log_load_complete!(
            source.name(),
            dataset.len(),
            dataset.report().skipped_count(),
            started.elapsed()
        );
        Ok(dataset)
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.initialized()
    }

    /// The loaded dataset
    ///
    /// # Errors
    ///
    /// Returns [`CaseMapError::NotReady`] before [`CaseStore::load`] resolves.
    pub fn dataset(&self) -> Result<Arc<CaseDataset>> {
        self.dataset.get().cloned().ok_or(CaseMapError::NotReady)
    }
}
