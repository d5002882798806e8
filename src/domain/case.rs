//! Case record domain model
//!
//! A [`CaseRecord`] is one normalized row of the source dataset. Records are
//! built once at load time and never mutated afterwards.

use super::ids::{CaseNumber, ClusterId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Place of stay used when the source leaves it blank
pub const UNKNOWN_PLACE: &str = "Unknown";

/// Nationality used when the source leaves it blank
pub const UNKNOWN_NATIONALITY: &str = "Unknown";

/// Reported gender of a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    /// Anything that is not exactly "Female" or "Male"
    Other,
}

impl Gender {
    /// Parses the source text; only exact "Female"/"Male" are recognised
    pub fn from_source(text: &str) -> Self {
        match text {
            "Female" => Gender::Female,
            "Male" => Gender::Male,
            _ => Gender::Other,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Female => write!(f, "Female"),
            Gender::Male => write!(f, "Male"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

/// A complete latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.latitude, self.longitude)
    }
}

/// A coordinate whose components may each be missing in the source
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PartialCoordinate {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PartialCoordinate {
    pub fn new(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both components absent
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Returns the coordinate only when both components are present
    pub fn complete(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
            _ => None,
        }
    }
}

impl From<Coordinate> for PartialCoordinate {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(Some(coordinate.latitude), Some(coordinate.longitude))
    }
}

/// Link from a case to the cluster location it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterRef {
    pub id: ClusterId,
    pub name: Option<String>,
    pub coordinate: PartialCoordinate,
}

/// One normalized case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub case_number: CaseNumber,
    pub confirmed_date: NaiveDate,
    pub discharge_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub age: u32,
    pub gender: Gender,
    pub nationality: String,
    pub place_of_stay: String,
    pub position: PartialCoordinate,
    pub cluster: Option<ClusterRef>,
    pub imported: bool,
    pub untraced: bool,
}

impl CaseRecord {
    /// Returns a builder for constructing a case record
    pub fn builder() -> CaseRecordBuilder {
        CaseRecordBuilder::default()
    }

    /// Cluster identifier, if the case belongs to one
    pub fn cluster_id(&self) -> Option<&ClusterId> {
        self.cluster.as_ref().map(|cluster| &cluster.id)
    }

    /// Cluster display name, if any
    pub fn cluster_name(&self) -> Option<&str> {
        self.cluster.as_ref().and_then(|cluster| cluster.name.as_deref())
    }
}

/// Builder for constructing CaseRecord instances
#[derive(Debug, Default)]
pub struct CaseRecordBuilder {
    case_number: Option<CaseNumber>,
    confirmed_date: Option<NaiveDate>,
    discharge_date: Option<NaiveDate>,
    death_date: Option<NaiveDate>,
    age: Option<u32>,
    gender: Option<Gender>,
    nationality: Option<String>,
    place_of_stay: Option<String>,
    position: PartialCoordinate,
    cluster: Option<ClusterRef>,
    imported: bool,
    untraced: bool,
}

impl CaseRecordBuilder {
    /// Creates a new CaseRecordBuilder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case_number(mut self, case_number: impl Into<CaseNumber>) -> Self {
        self.case_number = Some(case_number.into());
        self
    }

    pub fn confirmed_date(mut self, date: NaiveDate) -> Self {
        self.confirmed_date = Some(date);
        self
    }

    pub fn discharge_date(mut self, date: Option<NaiveDate>) -> Self {
        self.discharge_date = date;
        self
    }

    pub fn death_date(mut self, date: Option<NaiveDate>) -> Self {
        self.death_date = date;
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    pub fn place_of_stay(mut self, place: impl Into<String>) -> Self {
        self.place_of_stay = Some(place.into());
        self
    }

    pub fn position(mut self, position: PartialCoordinate) -> Self {
        self.position = position;
        self
    }

    pub fn cluster(mut self, cluster: Option<ClusterRef>) -> Self {
        self.cluster = cluster;
        self
    }

    pub fn imported(mut self, imported: bool) -> Self {
        self.imported = imported;
        self
    }

    pub fn untraced(mut self, untraced: bool) -> Self {
        self.untraced = untraced;
        self
    }

    /// Builds the case record
    ///
    /// # Errors
    ///
    /// Returns an error if case number, confirmed date or age is missing
    pub fn build(self) -> Result<CaseRecord, String> {
        Ok(CaseRecord {
            case_number: self.case_number.ok_or("case_number is required")?,
            confirmed_date: self.confirmed_date.ok_or("confirmed_date is required")?,
            discharge_date: self.discharge_date,
            death_date: self.death_date,
            age: self.age.ok_or("age is required")?,
            gender: self.gender.unwrap_or(Gender::Other),
            nationality: self
                .nationality
                .unwrap_or_else(|| UNKNOWN_NATIONALITY.to_string()),
            place_of_stay: self
                .place_of_stay
                .unwrap_or_else(|| UNKNOWN_PLACE.to_string()),
            position: self.position,
            cluster: self.cluster,
            imported: self.imported,
            untraced: self.untraced,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_gender_from_source_is_exact() {
        assert_eq!(Gender::from_source("Female"), Gender::Female);
        assert_eq!(Gender::from_source("Male"), Gender::Male);
        assert_eq!(Gender::from_source("male"), Gender::Other);
        assert_eq!(Gender::from_source(""), Gender::Other);
    }

    #[test]
    fn test_partial_coordinate_complete() {
        let full = PartialCoordinate::new(Some(1.3), Some(103.8));
        assert_eq!(full.complete(), Some(Coordinate::new(1.3, 103.8)));

        let half = PartialCoordinate::new(Some(1.3), None);
        assert!(half.complete().is_none());
        assert!(PartialCoordinate::unknown().complete().is_none());
    }

    #[test]
    fn test_case_builder() {
        let record = CaseRecord::builder()
            .case_number(7)
            .confirmed_date(date(2020, 1, 23))
            .discharge_date(Some(date(2020, 2, 4)))
            .age(66)
            .gender(Gender::Male)
            .nationality("China")
            .build()
            .unwrap();

        assert_eq!(record.case_number.get(), 7);
        assert_eq!(record.place_of_stay, UNKNOWN_PLACE);
        assert!(record.cluster_id().is_none());
        assert!(!record.imported);
    }

    #[test]
    fn test_case_builder_defaults_unknown_nationality() {
        let record = CaseRecord::builder()
            .case_number(8)
            .confirmed_date(date(2020, 1, 24))
            .age(40)
            .build()
            .unwrap();

        assert_eq!(record.nationality, UNKNOWN_NATIONALITY);
        assert_eq!(record.gender, Gender::Other);
        assert!(!record.imported);
    }

    #[test]
    fn test_case_builder_missing_field() {
        let result = CaseRecord::builder().case_number(1).age(30).build();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("confirmed_date is required"));
    }

    #[test]
    fn test_cluster_accessors() {
        let record = CaseRecord::builder()
            .case_number(3)
            .confirmed_date(date(2020, 2, 4))
            .age(44)
            .cluster(Some(ClusterRef {
                id: ClusterId::new("C1").unwrap(),
                name: Some("Yong Thai Hang".to_string()),
                coordinate: Coordinate::new(1.30, 103.85).into(),
            }))
            .build()
            .unwrap();

        assert_eq!(record.cluster_id().map(ClusterId::as_str), Some("C1"));
        assert_eq!(record.cluster_name(), Some("Yong Thai Hang"));
    }
}
