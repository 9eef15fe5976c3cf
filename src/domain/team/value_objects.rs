use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::roster::ValidationError;

/// Team name value object
///
/// # Invariants
/// - Surrounding whitespace is trimmed
/// - Between 3 and 50 characters after trimming
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TeamName(String);

impl TeamName {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 50;

    /// Trims and validates a raw team name
    ///
    /// # Returns
    /// * `Ok(TeamName)` - If the trimmed name has an allowed length
    /// * `Err(ValidationError::InvalidName)` - Otherwise
    ///
    /// # Example
    /// ```
    /// use fantasy_cricket_api::domain::team::TeamName;
    ///
    /// let name = TeamName::new("  Mumbai Mavericks ").expect("valid name");
    /// assert_eq!(name.as_str(), "Mumbai Mavericks");
    /// assert!(TeamName::new(" ab ").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(ValidationError::InvalidName {
                min: Self::MIN_LEN,
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wraps a name loaded from storage without re-checking it
    pub(crate) fn from_persistence(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamName {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl From<TeamName> for String {
    fn from(name: TeamName) -> Self {
        name.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name() {
        assert_eq!(TeamName::new("Chennai Kings").unwrap().as_str(), "Chennai Kings");
    }

    #[test]
    fn name_is_trimmed() {
        assert!(TeamName::new("\t XI  \n").is_err());
        assert_eq!(TeamName::new("  Royal XI  ").unwrap().as_str(), "Royal XI");
    }

    #[test]
    fn name_minimum_length() {
        assert!(TeamName::new("abc").is_ok());
        assert!(matches!(
            TeamName::new("ab"),
            Err(ValidationError::InvalidName { actual: 2, .. })
        ));
    }

    #[test]
    fn name_maximum_length() {
        assert!(TeamName::new(&"x".repeat(50)).is_ok());
        assert!(TeamName::new(&"x".repeat(51)).is_err());
    }

    #[test]
    fn name_length_counts_characters() {
        // Three characters, nine bytes
        assert!(TeamName::new("टीम").is_ok());
    }

    #[test]
    fn deserialized_name_is_validated() {
        let name: TeamName = serde_json::from_str("\"  Royal XI \"").unwrap();
        assert_eq!(name.as_str(), "Royal XI");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Royal XI\"");

        assert!(serde_json::from_str::<TeamName>("\"ab\"").is_err());
    }

    #[test]
    fn empty_name_fails() {
        assert!(TeamName::new("").is_err());
        assert!(TeamName::new("     ").is_err());
    }

    #[test]
    fn name_display() {
        let name = TeamName::new("Super Strikers").unwrap();
        assert_eq!(format!("{}", name), "Super Strikers");
    }
}
