//! Case status at a point in time
//!
//! Status is a pure function of the record and an as-of date, so scrubbing
//! the cutoff backwards never shows a discharge or death before it happened.
//!
//! Precedence, first match wins:
//! 1. discharged on or before `as_of` → [`CaseStatus::Discharged`]
//! 2. died on or before `as_of` → [`CaseStatus::Deceased`]
//! 3. otherwise → [`CaseStatus::Treated`]

use crate::domain::CaseRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived condition of a case at an as-of date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// Still under care
    Treated,
    Discharged,
    Deceased,
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStatus::Treated => write!(f, "In treatment"),
            CaseStatus::Discharged => write!(f, "Discharged"),
            CaseStatus::Deceased => write!(f, "Deceased"),
        }
    }
}

/// Resolves the status of `record` as of `as_of`
pub fn status(record: &CaseRecord, as_of: NaiveDate) -> CaseStatus {
    if is_discharged(record, as_of) {
        CaseStatus::Discharged
    } else if record.death_date.is_some_and(|died| died <= as_of) {
        CaseStatus::Deceased
    } else {
        CaseStatus::Treated
    }
}

/// True when a discharge was recorded on or before `as_of`
pub fn is_discharged(record: &CaseRecord, as_of: NaiveDate) -> bool {
    record
        .discharge_date
        .is_some_and(|discharged| discharged <= as_of)
}
