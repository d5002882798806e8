//! Domain identifier types with validation
//!
//! Newtype wrappers keep case numbers and cluster identifiers from being
//! mixed with plain integers and strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Case number newtype wrapper
///
/// The primary key of a case record in the source dataset.
///
/// # Examples
///
/// ```
/// use casemap::domain::ids::CaseNumber;
/// use std::str::FromStr;
///
/// let case = CaseNumber::from_str("42").unwrap();
/// assert_eq!(case.get(), 42);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CaseNumber(u32);

impl CaseNumber {
    /// Creates a new CaseNumber
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the numeric value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CaseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for CaseNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| format!("Invalid case number: {s:?}"))
    }
}

impl From<u32> for CaseNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

/// Cluster location identifier
///
/// Identifies a transmission site shared by two or more cases.
///
/// # Examples
///
/// ```
/// use casemap::domain::ids::ClusterId;
///
/// let id = ClusterId::new("C07").unwrap();
/// assert_eq!(id.as_str(), "C07");
/// assert!(ClusterId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterId(String);

impl ClusterId {
    /// Creates a new ClusterId, rejecting blank identifiers
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err("Cluster ID cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the cluster ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for ClusterId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ClusterId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_number_parse() {
        assert_eq!(CaseNumber::from_str(" 17 ").unwrap().get(), 17);
        assert!(CaseNumber::from_str("abc").is_err());
        assert!(CaseNumber::from_str("-3").is_err());
    }

    #[test]
    fn test_case_number_ordering() {
        assert!(CaseNumber::new(2) < CaseNumber::new(10));
        assert_eq!(CaseNumber::from(5).to_string(), "5");
    }

    #[test]
    fn test_cluster_id_trims() {
        let id = ClusterId::new(" grace-church ").unwrap();
        assert_eq!(id.as_str(), "grace-church");
        assert_eq!(id.to_string(), "grace-church");
    }

    #[test]
    fn test_cluster_id_empty() {
        assert!(ClusterId::new("").is_err());
        assert!(ClusterId::from_str("   ").is_err());
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&CaseNumber::new(9)).unwrap();
        assert_eq!(json, "9");
        let json = serde_json::to_string(&ClusterId::new("C1").unwrap()).unwrap();
        assert_eq!(json, "\"C1\"");
    }
}
