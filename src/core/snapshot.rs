//! Snapshot filter
//!
//! A [`Snapshot`] is the ordered prefix of the sorted record set confirmed on
//! or before a cutoff. Every aggregate is computed from a snapshot, which
//! keeps all of them consistent with one another and with the cutoff.

use crate::domain::CaseRecord;
use chrono::NaiveDate;

/// Records visible at a cutoff
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    records: &'a [CaseRecord],
    cutoff: NaiveDate,
}

impl<'a> Snapshot<'a> {
    /// Takes the prefix of `records` confirmed on or before `cutoff`
    ///
    /// `records` must be sorted ascending by confirmed date; the dataset
    /// guarantees this at load time.
    pub fn take(records: &'a [CaseRecord], cutoff: NaiveDate) -> Self {
        debug_assert!(
            records
                .windows(2)
                .all(|pair| pair[0].confirmed_date <= pair[1].confirmed_date),
            "snapshot source must be sorted by confirmed date"
        );
        let end = records.partition_point(|record| record.confirmed_date <= cutoff);
        Self {
            records: &records[..end],
            cutoff,
        }
    }

    pub fn records(&self) -> &'a [CaseRecord] {
        self.records
    }

    pub fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Confirmed date of the last visible record
    ///
    /// Statuses are evaluated at this date rather than the raw cutoff so they
    /// never look ahead of the visible cases. `None` for an empty snapshot.
    pub fn as_of(&self) -> Option<NaiveDate> {
        self.records.last().map(|record| record.confirmed_date)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, CaseRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for Snapshot<'a> {
    type Item = &'a CaseRecord;
    type IntoIter = std::slice::Iter<'a, CaseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &Snapshot<'a> {
    type Item = &'a CaseRecord;
    type IntoIter = std::slice::Iter<'a, CaseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
