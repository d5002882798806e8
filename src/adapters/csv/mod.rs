//! CSV case source
//!
//! Reads the line-list export: one header row naming the columns, then one
//! row per case. Quoted fields may contain the delimiter.

pub mod reader;
pub mod source;

pub use reader::parse_rows;
pub use source::{CsvFileSource, CsvTextSource};
