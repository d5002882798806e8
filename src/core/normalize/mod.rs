//! Record normalization
//!
//! Turns string-typed source rows into [`CaseRecord`]s. Rows that fail
//! required-field parsing are not silently coerced: they come back as
//! [`SkippedRow`]s carrying the [`RecordError`] so the caller can report how
//! much of the source was excluded.

pub mod coords;
pub mod dates;

use crate::config::DatasetConfig;
use crate::domain::{
    CaseNumber, CaseRecord, ClusterId, ClusterRef, Gender, RecordError, UNKNOWN_NATIONALITY,
    UNKNOWN_PLACE,
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Source column names
pub mod columns {
    pub const CASE_NUMBER: &str = "CASE_NUMBER";
    pub const CONFIRMED_DATE: &str = "CONFIRMED_DATE";
    pub const DISCHARGE_DATE: &str = "DISCHARGE_DATE";
    pub const DEATH_DATE: &str = "DEATH_DATE";
    pub const AGE: &str = "AGE";
    pub const GENDER: &str = "GENDER";
    pub const NATIONALITY: &str = "NATIONALITY";
    pub const PLACE_OF_STAY: &str = "PLACE_OF_STAY";
    pub const POS_LOCATION_COORD: &str = "POS_LOCATION_COORD";
    pub const POS_LOCATION_LAT: &str = "POS_LOCATION_LAT";
    pub const POS_LOCATION_LONG: &str = "POS_LOCATION_LONG";
    pub const CLUSTER_LOCATION_ID: &str = "CLUSTER_LOCATION_ID";
    pub const CLUSTER_LOCATION_NAME: &str = "CLUSTER_LOCATION_NAME";
    pub const CLUSTER_LOCATION_COORD: &str = "CLUSTER_LOCATION_COORD";
    pub const CLUSTER_LOCATION_LAT: &str = "CLUSTER_LOCATION_LAT";
    pub const CLUSTER_LOCATION_LONG: &str = "CLUSTER_LOCATION_LONG";
    pub const IMPORTED: &str = "IMPORTED";
    pub const UNTRACED: &str = "UNTRACED";

    /// Columns whose absence from the header makes the whole source unusable
    pub const REQUIRED: &[&str] = &[CASE_NUMBER, CONFIRMED_DATE, AGE];
}

/// Oldest age covered by the age brackets
pub const MAX_AGE: u32 = 100;

/// One source row before normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCaseRow {
    /// 1-based line number in the source, for reporting
    pub line: u64,
    pub fields: HashMap<String, String>,
}

impl RawCaseRow {
    pub fn new(line: u64, fields: HashMap<String, String>) -> Self {
        Self { line, fields }
    }

    /// Builds a row from column/value pairs
    pub fn from_pairs<'a>(line: u64, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            line,
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Trimmed value of `column`; blank values read as absent
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}

/// A row excluded from the record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// Source line, or the 1-based position for records built in memory
    pub line: u64,
    pub error: RecordError,
}

/// Case numbers already taken by accepted records
#[derive(Debug, Default)]
pub struct SeenCaseNumbers(HashSet<CaseNumber>);

impl SeenCaseNumbers {
    /// Claims `number` for a record at `line`
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::DuplicateCaseNumber`] when an earlier record
    /// already holds `number`. The repeat is logged as a data-quality finding.
    pub fn claim(&mut self, number: CaseNumber, line: u64) -> Result<(), RecordError> {
        if self.0.insert(number) {
            return Ok(());
        }
        crate::log_data_quality!(
            "duplicate_case_number",
            number,
            format!("line {line} repeats an earlier case and is skipped")
        );
        Err(RecordError::DuplicateCaseNumber {
            case_number: number.get(),
        })
    }
}

/// Output of normalizing a whole source
#[derive(Debug, Clone, Default)]
pub struct NormalizedRows {
    /// Accepted records, in source order
    pub records: Vec<CaseRecord>,
    pub skipped: Vec<SkippedRow>,
}

/// Parses raw rows into case records
#[derive(Debug, Clone)]
pub struct Normalizer {
    date_formats: Vec<String>,
    unknown_sentinel: String,
}

impl Normalizer {
    pub fn new(date_formats: Vec<String>, unknown_sentinel: impl Into<String>) -> Self {
        Self {
            date_formats,
            unknown_sentinel: unknown_sentinel.into(),
        }
    }

    pub fn from_config(config: &DatasetConfig) -> Self {
        Self::new(config.date_formats.clone(), config.unknown_sentinel.clone())
    }

    /// Normalizes every row, preserving order
    ///
    /// The first row carrying a case number wins; later repeats are skipped.
    pub fn normalize_rows<'a>(&self, rows: impl IntoIterator<Item = &'a RawCaseRow>) -> NormalizedRows {
        let mut output = NormalizedRows::default();
        let mut seen = SeenCaseNumbers::default();
        for row in rows {
            let normalized = self.normalize_row(row).and_then(|record| {
                seen.claim(record.case_number, row.line)?;
                Ok(record)
            });
            match normalized {
                Ok(record) => output.records.push(record),
                Err(error) => {
                    tracing::debug!(line = row.line, error = %error, "Skipping row");
                    output.skipped.push(SkippedRow {
                        line: row.line,
                        error,
                    });
                }
            }
        }
        output
    }

    /// Normalizes a single row
    ///
    /// # Errors
    ///
    /// Returns a [`RecordError`] when the case number, confirmed date or age
    /// is missing or unparsable, or the age is out of range.
    pub fn normalize_row(&self, row: &RawCaseRow) -> Result<CaseRecord, RecordError> {
        let case_number = CaseNumber::new(parse_integer(row, columns::CASE_NUMBER)?);
        let confirmed_date = self.required_date(row, columns::CONFIRMED_DATE)?;

        let age = parse_integer(row, columns::AGE)?;
        if age > MAX_AGE {
            return Err(RecordError::AgeOutOfRange { age });
        }

        let discharge_date = self.optional_date(row, columns::DISCHARGE_DATE);
        let death_date = self.optional_date(row, columns::DEATH_DATE);

        let place_of_stay = row
            .get(columns::PLACE_OF_STAY)
            .filter(|place| !place.eq_ignore_ascii_case(&self.unknown_sentinel))
            .unwrap_or(UNKNOWN_PLACE)
            .to_string();

        let position = coords::resolve_location(
            row.get(columns::POS_LOCATION_COORD),
            row.get(columns::POS_LOCATION_LAT),
            row.get(columns::POS_LOCATION_LONG),
            &self.unknown_sentinel,
        );

        Ok(CaseRecord {
            case_number,
            confirmed_date,
            discharge_date,
            death_date,
            age,
            gender: Gender::from_source(row.get(columns::GENDER).unwrap_or_default()),
            nationality: row
                .get(columns::NATIONALITY)
                .filter(|nationality| !nationality.eq_ignore_ascii_case(&self.unknown_sentinel))
                .unwrap_or(UNKNOWN_NATIONALITY)
                .to_string(),
            place_of_stay,
            position,
            cluster: self.cluster(row),
            imported: parse_flag(row.get(columns::IMPORTED)),
            untraced: parse_flag(row.get(columns::UNTRACED)),
        })
    }

    fn required_date(&self, row: &RawCaseRow, column: &str) -> Result<chrono::NaiveDate, RecordError> {
        let text = row.get(column).ok_or_else(|| RecordError::MissingField {
            column: column.to_string(),
        })?;
        dates::parse_date(text, &self.date_formats).ok_or_else(|| RecordError::InvalidDate {
            column: column.to_string(),
            value: text.to_string(),
        })
    }

    fn optional_date(&self, row: &RawCaseRow, column: &str) -> Option<chrono::NaiveDate> {
        let text = row.get(column)?;
        let parsed = dates::parse_date(text, &self.date_formats);
        if parsed.is_none() && !text.eq_ignore_ascii_case(&self.unknown_sentinel) {
            tracing::debug!(
                line = row.line,
                column,
                value = text,
                "Unparsable optional date treated as absent"
            );
        }
        parsed
    }

    fn cluster(&self, row: &RawCaseRow) -> Option<ClusterRef> {
        let id = row
            .get(columns::CLUSTER_LOCATION_ID)
            .filter(|id| !id.eq_ignore_ascii_case(&self.unknown_sentinel))
            .and_then(|id| ClusterId::new(id).ok())?;

        Some(ClusterRef {
            id,
            name: row.get(columns::CLUSTER_LOCATION_NAME).map(str::to_string),
            coordinate: coords::resolve_location(
                row.get(columns::CLUSTER_LOCATION_COORD),
                row.get(columns::CLUSTER_LOCATION_LAT),
                row.get(columns::CLUSTER_LOCATION_LONG),
                &self.unknown_sentinel,
            ),
        })
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::from_config(&DatasetConfig::default())
    }
}

fn parse_integer(row: &RawCaseRow, column: &str) -> Result<u32, RecordError> {
    let text = row.get(column).ok_or_else(|| RecordError::MissingField {
        column: column.to_string(),
    })?;
    text.parse::<u32>().map_err(|_| RecordError::InvalidInteger {
        column: column.to_string(),
        value: text.to_string(),
    })
}

fn parse_flag(text: Option<&str>) -> bool {
    matches!(
        text.map(str::to_ascii_lowercase).as_deref(),
        Some("true" | "yes" | "y" | "1")
    )
}
