//! In-memory catalog filtering.
//!
//! A pure, deterministic side-track with no network dependency: filters an
//! already-loaded product list by a conjunctive predicate set.

use serde::{Deserialize, Serialize};

/// One catalog product, as served by `GET /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub color: String,
    pub size: String,
    pub price: f64,
    pub rating: f64,
    #[serde(default)]
    pub image: Option<String>,
}

/// Predicate set for catalog filtering.
///
/// Unset predicates impose no constraint; set predicates must all match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    /// Case-insensitive substring match on the name.
    pub text: Option<String>,
    /// Exact color match.
    pub color: Option<String>,
    /// Exact size match.
    pub size: Option<String>,
    /// Minimum rating (inclusive).
    pub min_rating: Option<f64>,
}

impl CatalogQuery {
    fn matches(&self, item: &CatalogItem) -> bool {
        if let Some(text) = &self.text {
            if !item.name.to_lowercase().contains(&text.to_lowercase()) {
                return false;
            }
        }
        if let Some(color) = &self.color {
            if &item.color != color {
                return false;
            }
        }
        if let Some(size) = &self.size {
            if &item.size != size {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if item.rating < min_rating {
                return false;
            }
        }
        true
    }
}

/// Returns the items matching all provided predicates, in input order.
pub fn filter<'a>(items: &'a [CatalogItem], query: &CatalogQuery) -> Vec<&'a CatalogItem> {
    items.iter().filter(|item| query.matches(item)).collect()
}
