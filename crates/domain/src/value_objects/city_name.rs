//! City name value object
//!
//! A trimmed, non-blank city query as typed by the user.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Non-blank city query
///
/// # Examples
///
/// ```
/// use domain::value_objects::CityName;
///
/// let city = CityName::new("  Hanoi ").expect("valid city");
/// assert_eq!(city.as_str(), "Hanoi");
///
/// assert!(CityName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CityName(String);

impl CityName {
    /// Create a city name, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BlankCityName` if nothing is left after trimming.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::BlankCityName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the city name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for CityName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for CityName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for CityName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let city = CityName::new("  Ho Chi Minh City\t").unwrap();
        assert_eq!(city.as_str(), "Ho Chi Minh City");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(CityName::new(""), Err(DomainError::BlankCityName));
    }

    #[test]
    fn rejects_whitespace_only() {
        assert_eq!(CityName::new("   "), Err(DomainError::BlankCityName));
        assert_eq!(CityName::new("\n\t "), Err(DomainError::BlankCityName));
    }

    #[test]
    fn display_matches_inner() {
        let city = CityName::new("Berlin").unwrap();
        assert_eq!(city.to_string(), "Berlin");
    }

    #[test]
    fn try_from_str() {
        let city: CityName = "Paris".try_into().unwrap();
        assert_eq!(city.as_str(), "Paris");
        assert!(CityName::try_from(String::new()).is_err());
    }

    #[test]
    fn deserialize_validates() {
        let city: CityName = serde_json::from_str("\" Oslo \"").unwrap();
        assert_eq!(city.as_str(), "Oslo");
        assert!(serde_json::from_str::<CityName>("\"  \"").is_err());
    }
}
