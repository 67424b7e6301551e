//! Recommendation items received from the backend.
//!
//! Items have no identity beyond their array position and are never
//! persisted.

use serde::{Deserialize, Serialize};

/// Price of a recommendation.
///
/// The backend emits three shapes: a structured display variant, a plain
/// number, and occasionally a free-text string with currency decoration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Structured {
        value: f64,
        #[serde(default)]
        currency: Option<String>,
        #[serde(default)]
        display: Option<String>,
    },
    Plain(f64),
    Text(String),
}

impl Price {
    /// Human-readable price string.
    pub fn display(&self) -> String {
        match self {
            Price::Structured {
                display: Some(display),
                ..
            } => display.clone(),
            Price::Structured {
                value,
                currency,
                display: None,
            } => match currency {
                Some(currency) => format!("{value:.0} {currency}"),
                None => format!("{value:.0}"),
            },
            Price::Plain(value) => format!("{value:.0}"),
            Price::Text(text) => text.clone(),
        }
    }
}

/// One recommended product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    #[serde(default)]
    pub price: Option<Price>,
    /// Destination URL on the source site.
    #[serde(default)]
    pub product_url: Option<String>,
    /// Free-text rationale for the recommendation.
    #[serde(default)]
    pub why_recommended: Option<String>,
    /// Numeric match score (0-100).
    #[serde(default)]
    pub match_score: Option<f64>,
    /// Source-site label ("hepsiburada.com" etc.), used for badge lookup.
    #[serde(default)]
    pub source_site: Option<String>,
    /// Feature tags.
    #[serde(default)]
    pub features: Vec<String>,
}
