use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::fault::RegistryError;

/// Identifier of a named security pattern, e.g. `"reentrancy"` or
/// `"tx-origin"`.
///
/// Validated at construction: an empty or whitespace-only identifier is
/// rejected here, at the boundary, instead of surfacing later as a useless
/// lookup key. Deserialization goes through the same check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PatternId(String);

impl PatternId {
    pub fn new(id: impl Into<String>) -> Result<Self, RegistryError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(RegistryError::InvalidPatternId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PatternId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PatternId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PatternId {
    type Error = RegistryError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl TryFrom<&str> for PatternId {
    type Error = RegistryError;

    fn try_from(id: &str) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<PatternId> for String {
    fn from(id: PatternId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_regular_identifiers() {
        let id = PatternId::new("reentrancy").unwrap();
        assert_eq!(id.as_str(), "reentrancy");
        assert_eq!(id.to_string(), "reentrancy");
    }

    #[test]
    fn test_rejects_empty_identifier() {
        assert!(matches!(
            PatternId::new(""),
            Err(RegistryError::InvalidPatternId(_))
        ));
    }

    #[test]
    fn test_rejects_whitespace_identifier() {
        assert!(matches!(
            PatternId::new("   "),
            Err(RegistryError::InvalidPatternId(_))
        ));
    }

    #[test]
    fn test_deserialization_revalidates() {
        assert!(serde_json::from_str::<PatternId>("\"tx-origin\"").is_ok());
        assert!(serde_json::from_str::<PatternId>("\"\"").is_err());
    }
}
