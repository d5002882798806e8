//! Case source integrations
//!
//! - [`source`] - The [`CaseSource`] trait and a factory for the configured source
//! - [`csv`] - CSV file and in-memory sources
//!
//! # Example
//!
//! ```rust,no_run
//! use casemap::adapters::{CaseSource, CsvFileSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = CsvFileSource::new("data/cases.csv");
//! let rows = source.read_rows().await?;
//! println!("{} rows", rows.len());
//! # Ok(())
//! # }
//! ```

pub mod csv;
pub mod source;

pub use self::csv::{CsvFileSource, CsvTextSource};
pub use source::{create_case_source, CaseSource};
