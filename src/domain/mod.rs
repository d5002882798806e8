//! Domain models and types for casemap.
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`CaseNumber`], [`ClusterId`])
//! - **The case model** ([`CaseRecord`], [`Gender`], [`Coordinate`])
//! - **Error types** ([`CaseMapError`], [`DatasetError`], [`RecordError`])
//! - **Result type alias** ([`Result`])
//!
//! # Builder Pattern
//!
//! ```rust
//! use casemap::domain::{CaseRecord, Gender};
//! use chrono::NaiveDate;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let record = CaseRecord::builder()
//!     .case_number(1)
//!     .confirmed_date(NaiveDate::from_ymd_opt(2020, 1, 23).unwrap())
//!     .age(66)
//!     .gender(Gender::Male)
//!     .nationality("China")
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod case;
pub mod errors;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use case::{
    CaseRecord, CaseRecordBuilder, ClusterRef, Coordinate, Gender, PartialCoordinate,
    UNKNOWN_NATIONALITY, UNKNOWN_PLACE,
};
pub use errors::{CaseMapError, DatasetError, RecordError};
pub use ids::{CaseNumber, ClusterId};
pub use result::Result;
