//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers and text constraints are enforced at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Longest category name accepted, counted in characters.
pub const MAX_CATEGORY_NAME_LENGTH: usize = 255;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A required string was empty.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A string exceeded its maximum length in characters.
    #[error("{0} cannot be longer than {1}")]
    TooLong(&'static str, usize),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let value = value.into();
    if value.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(value)
    }
}

/// Unique identifier for a category.
///
/// Backed by a random (v4) UUID so identifiers can be minted without a
/// storage round-trip.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    pub const fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the UUID backing this identifier.
    pub const fn get(self) -> Uuid {
        self.0
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryId {
    type Err = TypeConstraintError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|e| TypeConstraintError::InvalidValue(format!("category id: {e}")))
    }
}

impl From<Uuid> for CategoryId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<CategoryId> for Uuid {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl PartialEq<Uuid> for CategoryId {
    fn eq(&self, other: &Uuid) -> bool {
        self.0 == *other
    }
}

impl PartialEq<CategoryId> for Uuid {
    fn eq(&self, other: &CategoryId) -> bool {
        *self == other.0
    }
}

/// Category name: non-empty and at most [`MAX_CATEGORY_NAME_LENGTH`]
/// characters. The value is stored exactly as given.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    const FIELD: &'static str = "name";

    /// Rejects empty or overlong inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = require_non_empty(value, Self::FIELD)?;
        if value.chars().count() > MAX_CATEGORY_NAME_LENGTH {
            return Err(TypeConstraintError::TooLong(
                Self::FIELD,
                MAX_CATEGORY_NAME_LENGTH,
            ));
        }
        Ok(Self(value))
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for CategoryName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for CategoryName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CategoryName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

impl PartialEq<&str> for CategoryName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<CategoryName> for &str {
    fn eq(&self, other: &CategoryName) -> bool {
        *self == other.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_category_names_as_given() {
        let name = CategoryName::new("  Filme  ").unwrap();
        assert_eq!(name.as_str(), "  Filme  ");

        let blank = CategoryName::new("   ").unwrap();
        assert_eq!(blank.as_str(), "   ");
    }

    #[test]
    fn rejects_empty_names() {
        assert_eq!(
            CategoryName::new("").unwrap_err(),
            TypeConstraintError::EmptyString("name")
        );
    }

    #[test]
    fn name_length_is_counted_in_characters() {
        assert!(CategoryName::new("é".repeat(MAX_CATEGORY_NAME_LENGTH)).is_ok());

        let padded = format!(" {} ", "a".repeat(MAX_CATEGORY_NAME_LENGTH - 1));
        assert_eq!(
            CategoryName::new(padded).unwrap_err(),
            TypeConstraintError::TooLong("name", MAX_CATEGORY_NAME_LENGTH)
        );

        let err = CategoryName::new("é".repeat(MAX_CATEGORY_NAME_LENGTH + 1)).unwrap_err();
        assert_eq!(err.to_string(), "name cannot be longer than 255");
    }

    #[test]
    fn name_deserialization_keeps_value_and_runs_validation() {
        let name: CategoryName = serde_json::from_str("\" Séries \"").unwrap();
        assert_eq!(name, " Séries ");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\" Séries \"");

        assert!(serde_json::from_str::<CategoryName>("\"\"").is_err());
    }

    #[test]
    fn generated_ids_are_unique_v4_uuids() {
        let a = CategoryId::new();
        let b = CategoryId::new();
        assert_ne!(a, b);
        assert_eq!(a.get().get_version_num(), 4);
    }

    #[test]
    fn parses_ids_from_strings() {
        let id = CategoryId::new();
        let parsed: CategoryId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);

        assert!(matches!(
            "not-a-uuid".parse::<CategoryId>(),
            Err(TypeConstraintError::InvalidValue(_))
        ));
    }
}
