//! Domain error types
//!
//! This module defines the error hierarchy for casemap. Library code returns
//! [`CaseMapError`]; per-row problems found while normalizing the source are
//! [`RecordError`]s and never abort a load on their own.

use thiserror::Error;

/// Main casemap error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum CaseMapError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Errors reading or parsing the case source as a whole
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// A read operation was requested before the one-time load resolved
    #[error("Case data is not loaded yet")]
    NotReady,

    /// The one-time load was attempted a second time
    #[error("Case data has already been loaded")]
    AlreadyLoaded,

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors affecting the whole case source
///
/// These don't expose third-party reader types.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A required header column is missing from the source
    #[error("Required column missing from source: {0}")]
    MissingColumn(String),

    /// The delimited text could not be parsed
    #[error("Failed to parse source at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// The source could not be read
    #[error("Failed to read source {source_name}: {message}")]
    Read {
        source_name: String,
        message: String,
    },
}

/// A single row that failed required-field parsing
///
/// Rows carrying one of these are excluded from every aggregate and counted
/// in the load report.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordError {
    /// Required field is absent or blank
    #[error("missing required field {column}")]
    MissingField { column: String },

    /// Field is not an integer
    #[error("field {column} is not an integer: {value:?}")]
    InvalidInteger { column: String, value: String },

    /// Field is not a date in any accepted format
    #[error("field {column} is not a recognised date: {value:?}")]
    InvalidDate { column: String, value: String },

    /// Age outside the bracketed range
    #[error("age {age} is outside the supported range 0-100")]
    AgeOutOfRange { age: u32 },

    /// Case number already taken by an earlier row
    #[error("case number {case_number} repeats an earlier row")]
    DuplicateCaseNumber { case_number: u32 },
}

// Conversion from std::io::Error
impl From<std::io::Error> for CaseMapError {
    fn from(err: std::io::Error) -> Self {
        CaseMapError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CaseMapError {
    fn from(err: serde_json::Error) -> Self {
        CaseMapError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CaseMapError {
    fn from(err: toml::de::Error) -> Self {
        CaseMapError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_casemap_error_display() {
        let err = CaseMapError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
        assert_eq!(
            CaseMapError::NotReady.to_string(),
            "Case data is not loaded yet"
        );
    }

    #[test]
    fn test_dataset_error_conversion() {
        let dataset_err = DatasetError::MissingColumn("CASE_NUMBER".to_string());
        let err: CaseMapError = dataset_err.into();
        assert!(matches!(err, CaseMapError::Dataset(_)));
        assert!(err.to_string().contains("CASE_NUMBER"));
    }

    #[test]
    fn test_record_error_display() {
        let err = RecordError::InvalidDate {
            column: "CONFIRMED_DATE".to_string(),
            value: "32-Jan-20".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "field CONFIRMED_DATE is not a recognised date: \"32-Jan-20\""
        );
        assert_eq!(
            RecordError::AgeOutOfRange { age: 104 }.to_string(),
            "age 104 is outside the supported range 0-100"
        );
        assert_eq!(
            RecordError::DuplicateCaseNumber { case_number: 12 }.to_string(),
            "case number 12 repeats an earlier row"
        );
    }

    #[test]
    fn test_record_error_serializes_with_kind_tag() {
        let err = RecordError::MissingField {
            column: "AGE".to_string(),
        };
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["kind"], "missing_field");
        assert_eq!(value["column"], "AGE");

        let value = serde_json::to_value(RecordError::AgeOutOfRange { age: 120 }).unwrap();
        assert_eq!(value["kind"], "age_out_of_range");
        assert_eq!(value["age"], 120);

        let value =
            serde_json::to_value(RecordError::DuplicateCaseNumber { case_number: 3 }).unwrap();
        assert_eq!(value["kind"], "duplicate_case_number");
        assert_eq!(value["case_number"], 3);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: CaseMapError = io_err.into();
        assert!(matches!(err, CaseMapError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: CaseMapError = toml_err.into();
        assert!(matches!(err, CaseMapError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }
}
