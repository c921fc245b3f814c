//! Catalog filter state and the visibility predicate.

use crate::catalog::{Product, ALL_CATEGORIES};
use serde::{Deserialize, Serialize};

/// The pair (active category, search query) driving catalog visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Active category, or `All`.
    pub active_category: String,
    /// Free-text query matched against product names.
    pub search_query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORIES.to_string(),
            search_query: String::new(),
        }
    }
}

impl FilterState {
    /// Create the default state: every category, empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.active_category = category.into();
        self
    }

    /// Set the search query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Reset to every category and an empty query.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check whether this state filters anything out.
    pub fn is_active(&self) -> bool {
        !self.selects_all() || !self.search_query.is_empty()
    }

    /// Check whether the `All` selector is active.
    pub fn selects_all(&self) -> bool {
        self.active_category == ALL_CATEGORIES
    }

    /// Listing heading for the active category.
    pub fn heading(&self) -> String {
        if self.selects_all() {
            "All Paint Products".to_string()
        } else {
            format!("{} Paints", self.active_category)
        }
    }

    /// Check whether a product passes both the category and the name test.
    pub fn matches(&self, product: &Product) -> bool {
        self.matcher().matches(product)
    }

    /// Prepare the predicate once so the query is lower-cased a single time.
    pub(crate) fn matcher(&self) -> Matcher<'_> {
        Matcher {
            category: (!self.selects_all()).then_some(self.active_category.as_str()),
            needle: self.search_query.to_lowercase(),
        }
    }
}

/// A prepared filter predicate.
pub(crate) struct Matcher<'a> {
    category: Option<&'a str>,
    needle: String,
}

impl Matcher<'_> {
    pub(crate) fn matches(&self, product: &Product) -> bool {
        self.category_matches(product) && self.name_matches(product)
    }

    pub(crate) fn name_matches(&self, product: &Product) -> bool {
        product.name_contains_lowercase(&self.needle)
    }

    fn category_matches(&self, product: &Product) -> bool {
        self.category.map_or(true, |c| product.category == c)
    }
}

/// Products passing `filter`, in their original relative order.
///
/// Pure: neither input is modified, and an unknown category simply yields
/// an empty list.
pub fn visible_products<'a, I>(products: I, filter: &FilterState) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let matcher = filter.matcher();
    products.into_iter().filter(|p| matcher.matches(p)).collect()
}
