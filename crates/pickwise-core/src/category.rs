//! Category descriptors fetched from the backend.
//!
//! The descriptor map is read-only per session and is only authoritative for
//! the expected question count and the landing-screen icons; actual question
//! content always comes from the backend per step.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fallback question count when a category has no descriptor.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

/// One question specification inside a category descriptor.
///
/// Only the fields the client needs are decoded; the backend carries more
/// (weights, dependencies) that are server-side concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSpec {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Descriptor for one product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CategoryDescriptor {
    /// Display icon for the landing grid.
    #[serde(default)]
    pub emoji: Option<String>,
    /// Ordered question specifications; the length drives progress display.
    #[serde(default)]
    pub specs: Vec<QuestionSpec>,
}

/// Category identifier → descriptor, as served by `GET /categories`.
///
/// A `BTreeMap` keeps landing-grid ordering deterministic.
pub type CategoryMap = BTreeMap<String, CategoryDescriptor>;

/// Expected total question count for a category.
///
/// Falls back to [`DEFAULT_QUESTION_COUNT`] when the category is unknown or
/// its descriptor carries no specs.
pub fn expected_question_count(categories: &CategoryMap, category: &str) -> usize {
    match categories.get(category) {
        Some(descriptor) if !descriptor.specs.is_empty() => descriptor.specs.len(),
        _ => DEFAULT_QUESTION_COUNT,
    }
}

/// Landing-grid icon for a category, generic when unknown.
pub fn icon_for(categories: &CategoryMap, category: &str) -> String {
    categories
        .get(category)
        .and_then(|d| d.emoji.clone())
        .unwrap_or_else(|| "🛒".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> CategoryMap {
        let raw = serde_json::json!({
            "Headphones": {
                "emoji": "🎧",
                "specs": [
                    {"id": "wireless", "type": "boolean"},
                    {"id": "anc", "type": "boolean"},
                    {"id": "budget_band", "type": "single_choice"}
                ]
            },
            "Klima": {"specs": []}
        });
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_expected_count_from_specs() {
        let map = sample_map();
        assert_eq!(expected_question_count(&map, "Headphones"), 3);
    }

    #[test]
    fn test_expected_count_falls_back() {
        let map = sample_map();
        assert_eq!(expected_question_count(&map, "Klima"), DEFAULT_QUESTION_COUNT);
        assert_eq!(expected_question_count(&map, "Drone"), DEFAULT_QUESTION_COUNT);
    }

    #[test]
    fn test_icon_lookup() {
        let map = sample_map();
        assert_eq!(icon_for(&map, "Headphones"), "🎧");
        assert_eq!(icon_for(&map, "Drone"), "🛒");
    }
}
