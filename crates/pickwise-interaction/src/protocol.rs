//! Wire contracts for the question endpoint.
//!
//! The backend answers `/ask` with several overlapping JSON shapes; some
//! payloads satisfy more than one. [`classify`] decodes them at the boundary
//! into a closed set of tagged variants, checked in a fixed priority order
//! so that callers dispatch exhaustively instead of shape-sniffing.

use pickwise_core::locale::Language;
use pickwise_core::recommendation::Recommendation;
use pickwise_core::{PickwiseError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /ask`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AskRequest {
    pub step: u32,
    pub category: String,
    pub answers: Vec<String>,
    pub language: Language,
}

/// A question to render, with its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionCard {
    pub question: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub tooltip: Option<String>,
    /// Server-side progress percentage, when provided.
    #[serde(default)]
    pub progress: Option<u32>,
}

/// Classified `/ask` response.
#[derive(Debug, Clone, PartialEq)]
pub enum AskResponse {
    /// The next question to display.
    Question(QuestionCard),
    /// Recommendations backed by a live-data search.
    ModernBatch(Vec<Recommendation>),
    /// Curated results served because live search was unavailable.
    FallbackBatch {
        items: Vec<Recommendation>,
        message: Option<String>,
    },
    /// Untagged recommendation list (legacy compatibility path).
    LegacyList(Vec<Recommendation>),
    /// Full category refresh; re-render the landing screen.
    CategoryRefresh(Vec<String>),
    /// Backend-reported error with no usable result set.
    Failure(String),
    /// Backend-reported error that still carried a backup result set.
    FailureWithFallback {
        items: Vec<Recommendation>,
        message: String,
    },
}

fn decode_items(raw: Option<&Value>) -> Result<Vec<Recommendation>> {
    match raw {
        Some(value) if value.is_array() => serde_json::from_value(value.clone())
            .map_err(|err| PickwiseError::unexpected(format!("bad recommendation list: {err}"))),
        _ => Ok(Vec::new()),
    }
}

fn decode_category_names(raw: &Value) -> Option<Vec<String>> {
    if let Some(list) = raw.as_array() {
        let names: Vec<String> = list
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();
        return Some(names);
    }
    raw.as_object()
        .map(|map| map.keys().cloned().collect())
}

/// Classifies a raw `/ask` payload, first match wins.
///
/// Priority order: question with options, modern batch, fallback batch,
/// bare list, category list, error flag (with or without a backup list).
/// A tagged batch with an empty list deliberately falls through to the
/// bare-list branch, matching the original ordered checks. Anything else is
/// an unrecoverable unexpected shape.
pub fn classify(value: Value) -> Result<AskResponse> {
    if value.get("question").is_some() && value.get("options").is_some() {
        let card: QuestionCard = serde_json::from_value(value)
            .map_err(|err| PickwiseError::unexpected(format!("bad question payload: {err}")))?;
        return Ok(AskResponse::Question(card));
    }

    let tag = value.get("type").and_then(Value::as_str);

    if tag == Some("modern_recommendation") {
        let items = decode_items(value.get("recommendations"))?;
        if !items.is_empty() {
            return Ok(AskResponse::ModernBatch(items));
        }
    }

    if tag == Some("fallback_recommendation") {
        let items = decode_items(value.get("recommendations"))?;
        if !items.is_empty() {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
            return Ok(AskResponse::FallbackBatch { items, message });
        }
    }

    if value.get("recommendations").is_some_and(Value::is_array) {
        let items = decode_items(value.get("recommendations"))?;
        return Ok(AskResponse::LegacyList(items));
    }

    if let Some(names) = value.get("categories").and_then(decode_category_names) {
        return Ok(AskResponse::CategoryRefresh(names));
    }

    if let Some(error) = value.get("error") {
        let message = error
            .as_str()
            .unwrap_or("backend reported an error")
            .to_string();
        let items = decode_items(value.get("fallback_recommendations"))?;
        if !items.is_empty() {
            return Ok(AskResponse::FailureWithFallback { items, message });
        }
        return Ok(AskResponse::Failure(message));
    }

    Err(PickwiseError::unexpected(format!(
        "no known shape matched: {value}"
    )))
}
