//! Headline counts for a snapshot

use crate::core::snapshot::Snapshot;
use crate::core::status::{status, CaseStatus};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CaseSummary {
    /// Date statuses were evaluated at; `None` for an empty snapshot
    pub as_of: Option<NaiveDate>,
    pub cases: usize,
    pub discharged: usize,
    pub in_treatment: usize,
    pub deceased: usize,
    pub imported: usize,
    pub untraced: usize,
}

pub fn summarize(snapshot: &Snapshot<'_>) -> CaseSummary {
    let Some(as_of) = snapshot.as_of() else {
        return CaseSummary::default();
    };

    let mut summary = CaseSummary {
        as_of: Some(as_of),
        cases: snapshot.len(),
        ..CaseSummary::default()
    };
    for record in snapshot {
        match status(record, as_of) {
            CaseStatus::Discharged => summary.discharged += 1,
            CaseStatus::Treated => summary.in_treatment += 1,
            CaseStatus::Deceased => summary.deceased += 1,
        }
        summary.imported += usize::from(record.imported);
        summary.untraced += usize::from(record.untraced);
    }
    summary
}
