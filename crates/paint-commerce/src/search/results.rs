//! Filtered listing and category facets.

use crate::catalog::{Catalog, Product, ALL_CATEGORIES};
use crate::search::{visible_products, FilterState};
use serde::Serialize;

/// What a product page renders for the current filter state.
#[derive(Debug, Clone, Serialize)]
pub struct Listing<'a> {
    /// Heading for the active category.
    pub heading: String,
    /// Visible products in catalog order.
    pub items: Vec<&'a Product>,
    /// One facet per category selector, `All` first.
    pub facets: Vec<CategoryFacet>,
    /// Whether any filter is narrowing the catalog.
    pub filtered: bool,
}

impl<'a> Listing<'a> {
    /// Build the listing for `filter` over `catalog`.
    pub fn build(catalog: &'a Catalog, filter: &FilterState) -> Self {
        Self {
            heading: filter.heading(),
            items: visible_products(catalog, filter),
            facets: category_facets(catalog, filter),
            filtered: filter.is_active(),
        }
    }

    /// Check if nothing is visible. Callers offer a clear-filters action here.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of visible products.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// A category selector with the number of products it would show.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryFacet {
    /// Category name, or `All`.
    pub category: String,
    /// Products matching the current search query in this category.
    pub count: usize,
    /// Whether this is the active category.
    pub selected: bool,
}

/// Facets for every selector of the catalog's category set.
///
/// Counts honour the search query but not the active category, so each
/// count is what selecting that category would display.
pub fn category_facets(catalog: &Catalog, filter: &FilterState) -> Vec<CategoryFacet> {
    let matcher = filter.matcher();
    let named: Vec<&Product> = catalog.iter().filter(|p| matcher.name_matches(p)).collect();

    catalog
        .categories()
        .selectors()
        .into_iter()
        .map(|category| {
            let count = if category == ALL_CATEGORIES {
                named.len()
            } else {
                named.iter().filter(|p| p.category == category).count()
            };
            CategoryFacet {
                category: category.to_string(),
                count,
                selected: filter.active_category == category,
            }
        })
        .collect()
}
