//! Snapshot aggregators
//!
//! Each aggregator is a pure function of a [`Snapshot`]. They share no state,
//! so the bundle returned by [`aggregate`] is always internally consistent.

pub mod age;
pub mod cluster;
pub mod country_codes;
pub mod nationality;
pub mod summary;

pub use age::{tally_ages, AgeBracket, AgeBreakdown, AgeBucket, GenderSplit, TreatmentSplit, AGE_BRACKETS};
pub use cluster::{locate_clusters, ClusterLocation};
pub use country_codes::{CountryCode, CountryCodes};
pub use nationality::{tally_nationalities, NationalityCount};
pub use summary::{summarize, CaseSummary};

use crate::core::snapshot::Snapshot;
use serde::Serialize;

/// Every aggregate for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregates {
    pub summary: CaseSummary,
    pub nationalities: Vec<NationalityCount>,
    pub age: AgeBreakdown,
    pub clusters: Vec<ClusterLocation>,
}

/// Computes all aggregates for `snapshot`
pub fn aggregate(snapshot: &Snapshot<'_>, codes: &CountryCodes) -> Aggregates {
    Aggregates {
        summary: summarize(snapshot),
        nationalities: tally_nationalities(snapshot, codes),
        age: tally_ages(snapshot),
        clusters: locate_clusters(snapshot),
    }
}
