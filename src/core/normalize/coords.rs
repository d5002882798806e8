//! Coordinate parsing
//!
//! A location is either one combined `"lat,long"` column or a pair of split
//! latitude/longitude columns. Each component may be missing independently.

use crate::domain::PartialCoordinate;

/// Parses one coordinate component
///
/// Blank text, the unknown sentinel and non-finite numbers yield `None`.
pub fn parse_component(text: &str, unknown_sentinel: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() || text.eq_ignore_ascii_case(unknown_sentinel) {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Splits a combined `"lat,long"` value on the first comma
pub fn parse_combined(text: &str, unknown_sentinel: &str) -> PartialCoordinate {
    let mut parts = text.splitn(2, ',');
    let latitude = parts
        .next()
        .and_then(|part| parse_component(part, unknown_sentinel));
    let longitude = parts
        .next()
        .and_then(|part| parse_component(part, unknown_sentinel));
    PartialCoordinate::new(latitude, longitude)
}

/// Resolves a location from the combined column, falling back to the split
/// columns when the combined column is absent
pub fn resolve_location(
    combined: Option<&str>,
    latitude: Option<&str>,
    longitude: Option<&str>,
    unknown_sentinel: &str,
) -> PartialCoordinate {
    match combined {
        Some(text) => parse_combined(text, unknown_sentinel),
        None => PartialCoordinate::new(
            latitude.and_then(|t| parse_component(t, unknown_sentinel)),
            longitude.and_then(|t| parse_component(t, unknown_sentinel)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_component() {
        assert_eq!(parse_component(" 1.3521 ", "Unknown"), Some(1.3521));
        assert_eq!(parse_component("", "Unknown"), None);
        assert_eq!(parse_component("unknown", "Unknown"), None);
        assert_eq!(parse_component("NaN", "Unknown"), None);
        assert_eq!(parse_component("north", "Unknown"), None);
    }

    #[test]
    fn test_parse_combined_both_present() {
        let coord = parse_combined("1.3048,103.8318", "Unknown");
        assert_eq!(coord, PartialCoordinate::new(Some(1.3048), Some(103.8318)));
    }

    #[test]
    fn test_parse_combined_partial() {
        let coord = parse_combined("1.3048,", "Unknown");
        assert_eq!(coord, PartialCoordinate::new(Some(1.3048), None));

        let coord = parse_combined(",103.8318", "Unknown");
        assert_eq!(coord, PartialCoordinate::new(None, Some(103.8318)));

        let coord = parse_combined("1.3048", "Unknown");
        assert_eq!(coord, PartialCoordinate::new(Some(1.3048), None));
    }

    #[test]
    fn test_resolve_location_prefers_combined() {
        let coord = resolve_location(Some("1.0,2.0"), Some("9.0"), Some("9.0"), "Unknown");
        assert_eq!(coord, PartialCoordinate::new(Some(1.0), Some(2.0)));
    }

    #[test]
    fn test_resolve_location_split_columns() {
        let coord = resolve_location(None, Some("1.29"), Some("103.85"), "Unknown");
        assert_eq!(coord, PartialCoordinate::new(Some(1.29), Some(103.85)));

        let coord = resolve_location(None, Some("Unknown"), None, "Unknown");
        assert_eq!(coord, PartialCoordinate::unknown());
    }
}
