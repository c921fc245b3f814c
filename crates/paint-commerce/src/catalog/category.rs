//! Category set for product organization.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Selector that matches every category.
pub const ALL_CATEGORIES: &str = "All";

/// Categories of the built-in paint catalog, in display order.
pub const PAINT_CATEGORIES: [&str; 6] = [
    "Interior Wall",
    "Rock Master",
    "Undercoat",
    "Stone Seal",
    "Emulsion",
    "Weathershield",
];

/// The fixed, ordered set of category names a catalog draws from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// Create a category set, rejecting blanks, duplicates and the reserved
    /// `All` selector.
    pub fn new<I, S>(names: I) -> Result<Self, CommerceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in names {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(CommerceError::InvalidCategories(
                    "category name is empty".to_string(),
                ));
            }
            if name == ALL_CATEGORIES {
                return Err(CommerceError::InvalidCategories(format!(
                    "'{}' is reserved for the all-categories selector",
                    ALL_CATEGORIES
                )));
            }
            if set.contains(&name) {
                return Err(CommerceError::InvalidCategories(format!(
                    "duplicate category '{}'",
                    name
                )));
            }
            set.names.push(name);
        }
        Ok(set)
    }

    /// The categories of the built-in paint catalog.
    pub fn paints() -> Self {
        Self {
            names: PAINT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Derive a set from category names in first-appearance order.
    pub(crate) fn derive<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::default();
        for name in names {
            if !set.contains(name) {
                set.names.push(name.to_string());
            }
        }
        set
    }

    /// Check whether a category belongs to the set.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Category names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Selectors for a category bar: `All` followed by every category.
    pub fn selectors(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORIES).chain(self.names()).collect()
    }

    /// Number of categories, excluding `All`.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
