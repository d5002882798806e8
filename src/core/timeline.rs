//! Temporal index over the full record set
//!
//! Bounds are computed once over the sorted, unfiltered records and drive the
//! cutoff selector: a slider position in days or epoch milliseconds maps back
//! to a calendar cutoff through [`TemporalBounds`].

use crate::domain::CaseRecord;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

/// First and last confirmed dates of the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemporalBounds {
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    /// Whole days from first to last date; 1 for an empty dataset
    pub day_span: i64,
    /// Milliseconds from first to last date; 0 for an empty dataset
    pub span_millis: i64,
}

impl TemporalBounds {
    /// Bounds of an empty dataset
    pub fn empty() -> Self {
        Self {
            first_date: None,
            last_date: None,
            day_span: 1,
            span_millis: 0,
        }
    }

    /// Computes bounds from records sorted by confirmed date
    pub fn from_records(records: &[CaseRecord]) -> Self {
        let (Some(first), Some(last)) = (records.first(), records.last()) else {
            return Self::empty();
        };
        let first_date = first.confirmed_date;
        let last_date = last.confirmed_date;
        let span = last_date.signed_duration_since(first_date);

        Self {
            first_date: Some(first_date),
            last_date: Some(last_date),
            day_span: span.num_days(),
            span_millis: span.num_milliseconds(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_date.is_none()
    }

    /// First date as UTC-midnight epoch milliseconds
    pub fn first_millis(&self) -> Option<i64> {
        self.first_date.map(date_to_millis)
    }

    /// Last date as UTC-midnight epoch milliseconds
    pub fn last_millis(&self) -> Option<i64> {
        self.last_date.map(date_to_millis)
    }

    /// Date `days` after the first date, clamped to the bounds
    pub fn date_at_offset(&self, days: i64) -> Option<NaiveDate> {
        let first = self.first_date?;
        let days = days.clamp(0, self.day_span.max(0));
        first.checked_add_signed(Duration::days(days))
    }

    /// Iterates every calendar date from first to last, `step_days` apart
    ///
    /// The last date is always yielded so a replay ends on the full dataset.
    pub fn dates(&self, step_days: u32) -> Vec<NaiveDate> {
        let (Some(first), Some(last)) = (self.first_date, self.last_date) else {
            return Vec::new();
        };
        let step = i64::from(step_days.max(1));
        let mut dates: Vec<NaiveDate> = (0..=self.day_span)
            .step_by(step as usize)
            .filter_map(|offset| first.checked_add_signed(Duration::days(offset)))
            .collect();
        if dates.last() != Some(&last) {
            dates.push(last);
        }
        dates
    }
}

impl Default for TemporalBounds {
    fn default() -> Self {
        Self::empty()
    }
}

/// Converts a date to UTC-midnight epoch milliseconds
pub fn date_to_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Converts epoch milliseconds to the UTC calendar date containing them
pub fn cutoff_from_millis(millis: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|instant| instant.date_naive())
}
