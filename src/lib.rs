// casemap - Point-in-time snapshots over epidemiological case records
// Copyright (c) 2025 Casemap Contributors
// Licensed under the MIT License

//! # casemap - Point-in-time case snapshots
//!
//! casemap loads a case line list once and answers one question for any
//! cutoff date: what did the outbreak look like with only the cases confirmed
//! up to that day?
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Loading** a CSV line list into sorted, typed case records
//! - **Filtering** the records to a cutoff date
//! - **Aggregating** headline counts, nationalities, age brackets and clusters
//! - **Resolving** map points, with a cluster fallback for cases lacking a location
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Derivations (snapshot, status, aggregates, points, feed)
//! - [`adapters`] - Case sources (CSV)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use casemap::adapters::create_case_source;
//! use casemap::config::load_config;
//! use casemap::core::CaseStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("casemap.toml")?;
//!     let source = create_case_source(&config.dataset);
//!
//!     let store = CaseStore::new();
//!     let dataset = store.load(source.as_ref(), &config.dataset).await?;
//!
//!     let snapshot = dataset.latest();
//!     let points = dataset.resolve_points(&snapshot);
//!     println!("{} points, {} unplottable", points.points.len(), points.unplottable);
//!     Ok(())
//! }
//! ```
//!
//! ## Consistency
//!
//! Every aggregate is computed from the same [`core::Snapshot`], and case
//! statuses are evaluated at the snapshot's last confirmed date. Moving the
//! cutoff backwards never shows a discharge that had not yet happened.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;

// Re-export commonly used types
pub use domain::{CaseMapError, Result};
