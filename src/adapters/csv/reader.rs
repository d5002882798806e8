//! Delimited-text parsing into raw rows

use crate::core::normalize::{columns, RawCaseRow};
use crate::domain::DatasetError;
use csv::{ReaderBuilder, StringRecord, Trim};

/// Parses CSV text with a header row into raw case rows
///
/// Short rows are accepted; their missing trailing columns read as absent.
///
/// # Errors
///
/// Returns [`DatasetError::MissingColumn`] when a required header is absent
/// and [`DatasetError::Parse`] when the text is not valid delimited data.
pub fn parse_rows(text: &str) -> Result<Vec<RawCaseRow>, DatasetError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(parse_error)?.clone();
    check_required_columns(&headers)?;

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(parse_error)?;
        let line = record
            .position()
            .map(|position| position.line())
            .unwrap_or(index as u64 + 2);

        if record.iter().all(str::is_empty) {
            continue;
        }

        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(column, value)| (column.to_string(), value.to_string()))
            .collect();
        rows.push(RawCaseRow::new(line, fields));
    }

    tracing::debug!(rows = rows.len(), columns = headers.len(), "Parsed CSV source");
    Ok(rows)
}

fn check_required_columns(headers: &StringRecord) -> Result<(), DatasetError> {
    match columns::REQUIRED
        .iter()
        .find(|required| !headers.iter().any(|header| header == **required))
    {
        Some(missing) => Err(DatasetError::MissingColumn((*missing).to_string())),
        None => Ok(()),
    }
}

fn parse_error(error: csv::Error) -> DatasetError {
    DatasetError::Parse {
        line: error.position().map(|position| position.line()).unwrap_or(0),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_with_line_numbers() {
        let text = "CASE_NUMBER,CONFIRMED_DATE,AGE,PLACE_OF_STAY\n\
                    1,23-Jan-20,66,\"Shangri-La, Rasa Sentosa\"\n\
                    2,24-Jan-20,53,\n";
        let rows = parse_rows(text).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[0].get("PLACE_OF_STAY"), Some("Shangri-La, Rasa Sentosa"));
        assert_eq!(rows[1].line, 3);
        assert_eq!(rows[1].get("AGE"), Some("53"));
        assert_eq!(rows[1].get("PLACE_OF_STAY"), None);
    }

    #[test]
    fn test_missing_required_column() {
        let err = parse_rows("CASE_NUMBER,AGE\n1,30\n").unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn(column) if column == "CONFIRMED_DATE"));
    }

    #[test]
    fn test_short_rows_and_blank_lines() {
        let text = "CASE_NUMBER,CONFIRMED_DATE,AGE,GENDER\n1,1-Feb-20,30\n,,,\n2,2-Feb-20,40,Male\n";
        let rows = parse_rows(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("GENDER"), None);
        assert_eq!(rows[1].get("GENDER"), Some("Male"));
        assert_eq!(rows[1].line, 4);
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let rows = parse_rows("\u{feff}CASE_NUMBER,CONFIRMED_DATE,AGE\n1,1-Feb-20,30\n").unwrap();
        assert_eq!(rows[0].get("CASE_NUMBER"), Some("1"));
    }

    #[test]
    fn test_header_only() {
        assert!(parse_rows("CASE_NUMBER,CONFIRMED_DATE,AGE\n").unwrap().is_empty());
    }
}
