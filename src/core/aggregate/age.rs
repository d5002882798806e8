//! Age-bracket tally
//!
//! Brackets are fixed and listed oldest first, the order the bar chart
//! renders them in. Every age in `0..=100` falls in exactly one bracket.

use crate::core::snapshot::Snapshot;
use crate::core::status::{status, CaseStatus};
use crate::domain::Gender;
use serde::Serialize;

/// Inclusive age range with a display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBracket {
    pub label: &'static str,
    pub min: u32,
    pub max: u32,
}

impl AgeBracket {
    pub fn contains(&self, age: u32) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

pub static AGE_BRACKETS: [AgeBracket; 8] = [
    AgeBracket { label: "80 +", min: 80, max: 100 },
    AgeBracket { label: "70 - 79", min: 70, max: 79 },
    AgeBracket { label: "60 - 69", min: 60, max: 69 },
    AgeBracket { label: "50 - 59", min: 50, max: 59 },
    AgeBracket { label: "40 - 49", min: 40, max: 49 },
    AgeBracket { label: "30 - 39", min: 30, max: 39 },
    AgeBracket { label: "20 - 29", min: 20, max: 29 },
    AgeBracket { label: "0 - 19", min: 0, max: 19 },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenderSplit {
    pub female: usize,
    pub male: usize,
    pub other: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreatmentSplit {
    pub discharged: usize,
    pub treatment: usize,
    pub deceased: usize,
}

/// Counts for one bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeBucket {
    pub bracket: AgeBracket,
    pub count: usize,
    pub gender_split: GenderSplit,
    pub treatment_split: TreatmentSplit,
}

/// Per-bracket counts plus the largest count for scaling bars
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub buckets: Vec<AgeBucket>,
    pub max: usize,
}

impl AgeBreakdown {
    /// Bar width of `bucket` relative to the largest bracket
    ///
    /// Returns 0.0 for an empty snapshot.
    pub fn width_ratio(&self, bucket: &AgeBucket) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            bucket.count as f64 / self.max as f64
        }
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.count).sum()
    }
}

/// Tallies the snapshot into [`AGE_BRACKETS`]
///
/// Statuses are evaluated at the snapshot's `as_of` date.
pub fn tally_ages(snapshot: &Snapshot<'_>) -> AgeBreakdown {
    let mut buckets: Vec<AgeBucket> = AGE_BRACKETS
        .iter()
        .map(|bracket| AgeBucket {
            bracket: *bracket,
            count: 0,
            gender_split: GenderSplit::default(),
            treatment_split: TreatmentSplit::default(),
        })
        .collect();

    if let Some(as_of) = snapshot.as_of() {
        for record in snapshot {
            let Some(bucket) = buckets.iter_mut().find(|b| b.bracket.contains(record.age)) else {
                tracing::warn!(
                    case_number = %record.case_number,
                    age = record.age,
                    "Age outside every bracket"
                );
                continue;
            };

            bucket.count += 1;
            match record.gender {
                Gender::Female => bucket.gender_split.female += 1,
                Gender::Male => bucket.gender_split.male += 1,
                Gender::Other => bucket.gender_split.other += 1,
            }
            match status(record, as_of) {
                CaseStatus::Discharged => bucket.treatment_split.discharged += 1,
                CaseStatus::Treated => bucket.treatment_split.treatment += 1,
                CaseStatus::Deceased => bucket.treatment_split.deceased += 1,
            }
        }
    }

    let max = buckets.iter().map(|bucket| bucket.count).max().unwrap_or(0);
    AgeBreakdown { buckets, max }
}
