//! Strongly-typed identifiers used across the domain.

use core::hash::{Hash, Hasher};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Warehouse item number (e.g. `477B`).
///
/// The original spelling is kept for display, but identity is
/// case-insensitive: `477b` and `477B` name the same item. `PartialEq` and
/// `Hash` agree on that.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemNumber(String);

impl ItemNumber {
    /// Parse a non-blank item number.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation(
                "item number",
                "can't be left blank",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against raw user input.
    pub fn matches(&self, other: &str) -> bool {
        folded(&self.0).eq(folded(other))
    }
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

impl PartialEq for ItemNumber {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for ItemNumber {}

impl Hash for ItemNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in folded(&self.0) {
            c.hash(state);
        }
    }
}

impl core::fmt::Display for ItemNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ItemNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemNumber> for String {
    fn from(value: ItemNumber) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn blank_item_number_is_rejected() {
        let err = ItemNumber::new("   ").unwrap_err();
        assert_eq!(err.field(), Some("item number"));
    }

    #[test]
    fn matching_ignores_case_but_display_preserves_it() {
        let id: ItemNumber = "5a7B".parse().unwrap();
        assert!(id.matches("5A7b"));
        assert!(!id.matches("5A7"));
        assert_eq!(id.to_string(), "5a7B");
    }

    #[test]
    fn equality_and_hash_are_case_insensitive() {
        let mut set = HashSet::new();
        set.insert(ItemNumber::new("aa11").unwrap());
        assert!(set.contains(&ItemNumber::new("AA11").unwrap()));
        assert_eq!(ItemNumber::new("Aa11").unwrap(), ItemNumber::new("aA11").unwrap());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ItemNumber::new("477B").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"477B\"");
        let back: ItemNumber = serde_json::from_str("\"477b\"").unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<ItemNumber>("\" \"").is_err());
    }
}
