// file: src/engine/client.rs
// description: OpenSearch client wrapper behind a narrow engine trait
// reference: https://docs.opensearch.org/latest/api-reference/

use crate::config::EngineConfig;
use crate::error::{AppError, Result};
use crate::models::Document;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

/// Narrow interface over the external engine. Everything the bootstrap
/// sequencer and the search service need, and nothing more, so both can
/// run against an in-memory fake in tests.
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Whether the engine answers its health endpoint.
    async fn health(&self) -> Result<bool>;

    async fn index_exists(&self, index: &str) -> Result<bool>;

    async fn create_index(&self, index: &str, body: Value) -> Result<()>;

    async fn count(&self, index: &str) -> Result<u64>;

    async fn index_document(&self, index: &str, id: u64, document: &Document) -> Result<()>;

    /// Force a visibility refresh so freshly indexed documents are searchable.
    async fn refresh(&self, index: &str) -> Result<()>;

    /// Execute a search body and return the raw hit `_source` objects in
    /// the order the engine ranked them.
    async fn search(&self, index: &str, body: Value) -> Result<Vec<Value>>;
}

#[derive(Debug, Deserialize)]
struct ClusterHealth {
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u64,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: SearchHits,
}

#[derive(Debug, Deserialize)]
struct SearchHits {
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "_source", default)]
    source: Value,
}

/// Thin reqwest-based client for the OpenSearch REST API. One instance
/// is shared across all requests; reqwest pools connections internally.
#[derive(Clone)]
pub struct OpenSearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenSearchClient {
    pub fn new(config: &EngineConfig) -> Self {
        info!("Engine client targeting {}", config.base_url());

        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Turn a non-2xx engine response into an error carrying status and body.
    async fn reject(context: &str, response: reqwest::Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        AppError::Engine(format!("{context} failed with status {status}: {body}"))
    }
}

#[async_trait]
impl SearchEngine for OpenSearchClient {
    async fn health(&self) -> Result<bool> {
        debug!("Checking engine cluster health");

        let response = self.http.get(self.url("_cluster/health")).send().await?;

        if !response.status().is_success() {
            return Err(Self::reject("health check", response).await);
        }

        let health: ClusterHealth = response.json().await?;
        Ok(health.status.is_some())
    }

    async fn index_exists(&self, index: &str) -> Result<bool> {
        let response = self.http.head(self.url(index)).send().await?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(Self::reject("index existence check", response).await),
        }
    }

    async fn create_index(&self, index: &str, body: Value) -> Result<()> {
        info!("Creating index '{}'", index);

        let response = self.http.put(self.url(index)).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(Self::reject("index creation", response).await);
        }

        Ok(())
    }

    async fn count(&self, index: &str) -> Result<u64> {
        let response = self
            .http
            .get(self.url(&format!("{index}/_count")))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::reject("document count", response).await);
        }

        let count: CountResponse = response.json().await?;
        Ok(count.count)
    }

    async fn index_document(&self, index: &str, id: u64, document: &Document) -> Result<()> {
        debug!("Indexing document {} into '{}'", id, index);

        let response = self
            .http
            .put(self.url(&format!("{index}/_doc/{id}")))
            .json(document)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::reject("document indexing", response).await);
        }

        Ok(())
    }

    async fn refresh(&self, index: &str) -> Result<()> {
        let response = self
            .http
            .post(self.url(&format!("{index}/_refresh")))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::reject("index refresh", response).await);
        }

        Ok(())
    }

    async fn search(&self, index: &str, body: Value) -> Result<Vec<Value>> {
        let response = self
            .http
            .post(self.url(&format!("{index}/_search")))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::reject("search", response).await);
        }

        let results: SearchResponse = response.json().await?;

        debug!("Search returned {} hits", results.hits.hits.len());

        Ok(results.hits.hits.into_iter().map(|h| h.source).collect())
    }
}
