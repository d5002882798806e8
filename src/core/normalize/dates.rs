//! Date parsing for source date columns
//!
//! The source writes dates as day, month name and two-digit year. Two
//! separators have been seen in published datasets ("23-Jan-20" and
//! "23 Jan 20"), so every configured format is tried in order.

use chrono::NaiveDate;

/// Parses `text` with the first format that accepts it
pub fn parse_date<S: AsRef<str>>(text: &str, formats: &[S]) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format.as_ref()).ok())
}
