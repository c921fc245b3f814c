//! Search module.
//!
//! Contains the filter state, the visibility predicate, and listing facets.

mod filter;
mod results;

pub use filter::{visible_products, FilterState};
pub use results::{category_facets, CategoryFacet, Listing};
