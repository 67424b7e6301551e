//! Backend HTTP client.
//!
//! The backend's internals are opaque; only the request/response contracts
//! observed by the client are modeled here. The trait seam lets the flow
//! controller run against an in-memory backend in tests.

use crate::protocol::{classify, AskRequest, AskResponse};
use async_trait::async_trait;
use pickwise_core::catalog::CatalogItem;
use pickwise_core::category::CategoryMap;
use pickwise_core::{PickwiseError, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

/// Client-side view of the recommendation backend.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// `GET /categories` — full category descriptor map.
    async fn categories(&self) -> Result<CategoryMap>;

    /// `POST /detect_category` — best-effort category for a free-text query.
    async fn detect_category(&self, query: &str) -> Result<Option<String>>;

    /// `POST /ask` — next question or a recommendation batch, classified.
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse>;

    /// `GET /products` — the browsable catalog list.
    async fn products(&self) -> Result<Vec<CatalogItem>>;
}

#[derive(Deserialize)]
struct DetectCategoryResponse {
    #[serde(default)]
    category: Option<String>,
}

/// `BackendClient` implementation over HTTP.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Creates a client for the given base URL (e.g. `http://localhost:8080`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json(&self, response: reqwest::Response, path: &str) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(PickwiseError::transport(format!(
                "{path} returned {status}: {body}"
            )));
        }
        response
            .json()
            .await
            .map_err(|err| PickwiseError::transport(format!("{path} body: {err}")))
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|err| PickwiseError::transport(format!("{path}: {err}")))?;
        self.read_json(response, path).await
    }

    async fn post_json(&self, path: &str, body: &impl serde::Serialize) -> Result<Value> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|err| PickwiseError::transport(format!("{path}: {err}")))?;
        self.read_json(response, path).await
    }
}

#[async_trait]
impl BackendClient for HttpBackend {
    async fn categories(&self) -> Result<CategoryMap> {
        let value = self.get_json("/categories").await?;
        serde_json::from_value(value)
            .map_err(|err| PickwiseError::unexpected(format!("bad category map: {err}")))
    }

    async fn detect_category(&self, query: &str) -> Result<Option<String>> {
        let body = serde_json::json!({ "query": query });
        let value = self.post_json("/detect_category", &body).await?;
        let decoded: DetectCategoryResponse = serde_json::from_value(value)
            .map_err(|err| PickwiseError::unexpected(format!("bad detect payload: {err}")))?;
        Ok(decoded.category.filter(|c| !c.is_empty()))
    }

    async fn ask(&self, request: &AskRequest) -> Result<AskResponse> {
        let value = self.post_json("/ask", request).await?;
        classify(value)
    }

    async fn products(&self) -> Result<Vec<CatalogItem>> {
        let value = self.get_json("/products").await?;
        serde_json::from_value(value)
            .map_err(|err| PickwiseError::unexpected(format!("bad product list: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("http://localhost:8080/");
        assert_eq!(backend.url("/ask"), "http://localhost:8080/ask");
    }
}
