// ABOUTME: Normalized ingredient key used for case-insensitive identity
// ABOUTME: Wraps a lowercased name and provides substring containment checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Lowercased ingredient name.
///
/// Two detections or recipe ingredients are "the same ingredient" exactly when
/// their keys are equal, so this type is what goes into sets and maps.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct IngredientKey(String);

impl IngredientKey {
    /// Build a key by lowercasing `name`
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.to_lowercase())
    }

    /// The normalized name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the name is empty or whitespace only
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Substring containment in either direction.
    ///
    /// This is reflexive, so equal keys always overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.0.contains(other.as_str()) || other.0.contains(self.as_str())
    }
}

impl From<String> for IngredientKey {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl From<&str> for IngredientKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<IngredientKey> for String {
    fn from(key: IngredientKey) -> Self {
        key.0
    }
}

impl AsRef<str> for IngredientKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for IngredientKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IngredientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_case_insensitive() {
        assert_eq!(IngredientKey::new("Egg"), IngredientKey::new("egg"));
        assert_eq!(IngredientKey::new("BASIL").as_str(), "basil");
    }

    #[test]
    fn test_overlap_is_reflexive_and_symmetric() {
        let egg = IngredientKey::new("egg");
        let eggplant = IngredientKey::new("Eggplant");
        assert!(egg.overlaps(&egg));
        assert!(egg.overlaps(&eggplant));
        assert!(eggplant.overlaps(&egg));
        assert!(!egg.overlaps(&IngredientKey::new("kiwi")));
    }

    #[test]
    fn test_deserialization_normalizes() {
        let key: IngredientKey = serde_json::from_str("\"Cherry Tomato\"").unwrap();
        assert_eq!(key.as_str(), "cherry tomato");
    }
}
