//! Validated name newtypes for domain entities
//!
//! `CharacterName` is valid by construction:
//! - Trimmed of leading/trailing whitespace
//! - Between 4 and 15 characters
//! - Only ASCII letters and underscores

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Minimum length for a character name
const MIN_NAME_LENGTH: usize = 4;

/// Maximum length for a character name
const MAX_NAME_LENGTH: usize = 15;

// ============================================================================
// CharacterName
// ============================================================================

/// A validated character name (4-15 chars, `[A-Za-z_]` only, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new validated character name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name is shorter than 4 or longer than 15 characters
    /// - The name contains anything other than letters and underscores
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Character name is required"));
        }
        let length = trimmed.chars().count();
        if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
            return Err(DomainError::validation(format!(
                "Name must be between {} and {} characters",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH
            )));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic() || c == '_') {
            return Err(DomainError::validation(
                "Name must contain only letters (A-Z, a-z) and underscore (_), no numbers or special characters",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison, used for uniqueness checks.
    pub fn matches_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_and_underscores() {
        let name = CharacterName::new("  Hero_One ").unwrap();
        assert_eq!(name.as_str(), "Hero_One");
    }

    #[test]
    fn rejects_empty() {
        assert!(CharacterName::new("   ").is_err());
    }

    #[test]
    fn rejects_out_of_range_lengths() {
        assert!(CharacterName::new("Bob").is_err());
        assert!(CharacterName::new("Abcdefghijklmnop").is_err());
        assert!(CharacterName::new("Abcd").is_ok());
        assert!(CharacterName::new("Abcdefghijklmno").is_ok());
    }

    #[test]
    fn rejects_digits_and_symbols() {
        assert!(CharacterName::new("Hero123").is_err());
        assert!(CharacterName::new("Hero-One").is_err());
        assert!(CharacterName::new("Hero One").is_err());
    }

    #[test]
    fn matches_ignore_case() {
        let name = CharacterName::new("Sneaky_Thief").unwrap();
        assert!(name.matches_ignore_case("sneaky_thief"));
        assert!(!name.matches_ignore_case("sneaky"));
    }

    #[test]
    fn serde_round_trip_validates() {
        let json = serde_json::to_string(&CharacterName::new("Magic_User").unwrap()).unwrap();
        assert_eq!(json, "\"Magic_User\"");
        let bad: Result<CharacterName, _> = serde_json::from_str("\"x1\"");
        assert!(bad.is_err());
    }
}
