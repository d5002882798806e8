//! Nationality tally
//!
//! One row per nationality present in the snapshot, in order of first
//! appearance. Nationalities absent from the snapshot produce no row.

use super::country_codes::CountryCodes;
use crate::core::snapshot::Snapshot;
use serde::Serialize;
use std::collections::HashMap;

/// Case count for one nationality
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NationalityCount {
    pub nationality: String,
    pub count: usize,
    pub country_code: String,
    /// The country code is the configured default, not a real mapping
    pub code_is_fallback: bool,
}

/// Groups the snapshot by nationality
pub fn tally_nationalities(snapshot: &Snapshot<'_>, codes: &CountryCodes) -> Vec<NationalityCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tally: Vec<NationalityCount> = Vec::new();

    for record in snapshot {
        let nationality = record.nationality.as_str();
        match index.get(nationality) {
            Some(&position) => tally[position].count += 1,
            None => {
                let resolved = codes.resolve(nationality);
                if resolved.fallback {
                    crate::log_data_quality!(
                        "unmapped_nationality",
                        nationality,
                        format!("using default country code {}", resolved.code)
                    );
                }
                index.insert(nationality, tally.len());
                tally.push(NationalityCount {
                    nationality: nationality.to_string(),
                    count: 1,
                    country_code: resolved.code,
                    code_is_fallback: resolved.fallback,
                });
            }
        }
    }

    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CaseRecord;
    use chrono::NaiveDate;

    fn records(nationalities: &[&str]) -> Vec<CaseRecord> {
        nationalities
            .iter()
            .enumerate()
            .map(|(i, n)| {
                CaseRecord::builder()
                    .case_number(i as u32 + 1)
                    .confirmed_date(NaiveDate::from_ymd_opt(2020, 2, 1 + i as u32).unwrap())
                    .age(30)
                    .nationality(*n)
                    .build()
                    .unwrap()
            })
            .collect()
    }

    fn cutoff() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 12, 31).unwrap()
    }

    #[test]
    fn test_first_appearance_order() {
        let all = records(&["China", "Singapore", "China", "Bangladesh", "Singapore"]);
        let tally = tally_nationalities(&Snapshot::take(&all, cutoff()), &CountryCodes::default());

        let rows: Vec<(&str, usize, &str)> = tally
            .iter()
            .map(|t| (t.nationality.as_str(), t.count, t.country_code.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![("China", 2, "cn"), ("Singapore", 2, "sg"), ("Bangladesh", 1, "bd")]
        );
    }

    #[test]
    fn test_counts_sum_to_snapshot_size() {
        let all = records(&["China", "India", "China", "Malaysia", "India", "India"]);
        let snapshot = Snapshot::take(&all, NaiveDate::from_ymd_opt(2020, 2, 4).unwrap());
        let tally = tally_nationalities(&snapshot, &CountryCodes::default());

        let total: usize = tally.iter().map(|t| t.count).sum();
        assert_eq!(total, snapshot.len());
        assert_eq!(tally.len(), 3);
    }

    #[test]
    fn test_absent_nationalities_are_omitted() {
        let all = records(&["China", "India"]);
        let snapshot = Snapshot::take(&all, NaiveDate::from_ymd_opt(2020, 2, 1).unwrap());
        let tally = tally_nationalities(&snapshot, &CountryCodes::default());
        assert_eq!(tally.len(), 1);
        assert_eq!(tally[0].nationality, "China");
    }

    #[test]
    fn test_unmapped_nationality_is_flagged() {
        let all = records(&["Atlantis"]);
        let tally = tally_nationalities(&Snapshot::take(&all, cutoff()), &CountryCodes::default());
        assert_eq!(tally[0].country_code, "sg");
        assert!(tally[0].code_is_fallback);
    }

    #[test]
    fn test_empty_snapshot() {
        let tally = tally_nationalities(&Snapshot::take(&[], cutoff()), &CountryCodes::default());
        assert!(tally.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let all = records(&["China", "Singapore", "China"]);
        let snapshot = Snapshot::take(&all, cutoff());
        let codes = CountryCodes::default();
        assert_eq!(
            tally_nationalities(&snapshot, &codes),
            tally_nationalities(&snapshot, &codes)
        );
    }
}
