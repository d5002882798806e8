//! Core derivation logic for casemap.
//!
//! Everything here is synchronous and pure except the one-time load in
//! [`dataset::CaseStore`] and the [`feed`] task.
//!
//! # Modules
//!
//! - [`normalize`] - Raw rows to typed case records
//! - [`status`] - Case status at an as-of date
//! - [`timeline`] - Temporal bounds and cutoff conversion
//! - [`snapshot`] - Records visible at a cutoff
//! - [`aggregate`] - Summary, nationality, age-bracket and cluster tallies
//! - [`geo`] - Map point resolution
//! - [`dataset`] - The loaded dataset and its read operations
//! - [`feed`] - Throttled, latest-wins snapshot derivation
//!
//! # Example
//!
//! ```rust,no_run
//! use casemap::adapters::CsvFileSource;
//! use casemap::config::DatasetConfig;
//! use casemap::core::dataset::CaseStore;
//! use chrono::NaiveDate;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DatasetConfig::default();
//! let store = CaseStore::new();
//! let dataset = store.load(&CsvFileSource::new(&config.path), &config).await?;
//!
//! let snapshot = dataset.snapshot(NaiveDate::from_ymd_opt(2020, 2, 10).unwrap());
//! let aggregates = dataset.aggregates(&snapshot);
//! println!("{} cases, {} discharged", aggregates.summary.cases, aggregates.summary.discharged);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod dataset;
pub mod feed;
pub mod geo;
pub mod normalize;
pub mod snapshot;
pub mod status;
pub mod timeline;

pub use dataset::{CaseDataset, CaseStore, LoadReport, SnapshotView};
pub use feed::SnapshotFeed;
pub use snapshot::Snapshot;
pub use status::CaseStatus;
pub use timeline::TemporalBounds;
