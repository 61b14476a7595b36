// file: src/engine/fake.rs
// description: in-memory SearchEngine used by bootstrap and search tests
// reference: test double for the OpenSearch client

use crate::engine::SearchEngine;
use crate::error::{AppError, Result};
use crate::models::Document;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct FakeState {
    health_calls: u64,
    search_calls: u64,
    refresh_calls: u64,
    index_created: bool,
    documents: Vec<(u64, Document)>,
}

/// Minimal in-memory engine. Interprets exactly the query shapes the
/// translator produces: match_all, multi_match over title/content
/// (substring match stands in for analysis), and term on content_type.
#[derive(Debug, Default)]
pub struct FakeEngine {
    /// Number of health calls that fail before the engine reports healthy.
    unhealthy_for: u64,
    state: Mutex<FakeState>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unhealthy_for(calls: u64) -> Self {
        Self {
            unhealthy_for: calls,
            ..Self::default()
        }
    }

    pub fn document_count(&self) -> usize {
        self.state.lock().unwrap().documents.len()
    }

    pub fn search_calls(&self) -> u64 {
        self.state.lock().unwrap().search_calls
    }

    pub fn refresh_calls(&self) -> u64 {
        self.state.lock().unwrap().refresh_calls
    }

    pub fn index_created(&self) -> bool {
        self.state.lock().unwrap().index_created
    }

    fn matches(query: &Value, document: &Document) -> bool {
        if query.get("match_all").is_some() {
            return true;
        }

        let Some(must) = query.pointer("/bool/must").and_then(Value::as_array) else {
            return false;
        };

        must.iter().all(|clause| Self::clause_matches(clause, document))
    }

    fn clause_matches(clause: &Value, document: &Document) -> bool {
        if let Some(term) = clause.pointer("/multi_match/query").and_then(Value::as_str) {
            return document.title.contains(term) || document.content.contains(term);
        }

        if let Some(content_type) = clause.pointer("/term/content_type").and_then(Value::as_str) {
            return document.content_type == content_type;
        }

        false
    }
}

#[async_trait]
impl SearchEngine for FakeEngine {
    async fn health(&self) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        state.health_calls += 1;

        if state.health_calls <= self.unhealthy_for {
            return Err(AppError::Engine("connection refused".to_string()));
        }

        Ok(true)
    }

    async fn index_exists(&self, _index: &str) -> Result<bool> {
        Ok(self.state.lock().unwrap().index_created)
    }

    async fn create_index(&self, _index: &str, _body: Value) -> Result<()> {
        let mut state = self.state.lock().unwrap();

        if state.index_created {
            return Err(AppError::Engine("index already exists".to_string()));
        }

        state.index_created = true;
        Ok(())
    }

    async fn count(&self, _index: &str) -> Result<u64> {
        Ok(self.state.lock().unwrap().documents.len() as u64)
    }

    async fn index_document(&self, _index: &str, id: u64, document: &Document) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.documents.retain(|(existing, _)| *existing != id);
        state.documents.push((id, document.clone()));
        Ok(())
    }

    async fn refresh(&self, _index: &str) -> Result<()> {
        self.state.lock().unwrap().refresh_calls += 1;
        Ok(())
    }

    async fn search(&self, _index: &str, body: Value) -> Result<Vec<Value>> {
        let mut state = self.state.lock().unwrap();
        state.search_calls += 1;

        let query = body.get("query").cloned().unwrap_or(Value::Null);
        let size = body
            .get("size")
            .and_then(Value::as_u64)
            .unwrap_or(u64::MAX) as usize;

        Ok(state
            .documents
            .iter()
            .filter(|(_, doc)| Self::matches(&query, doc))
            .take(size)
            .map(|(_, doc)| serde_json::to_value(doc).unwrap())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_health_recovers_after_configured_failures() {
        let engine = FakeEngine::unhealthy_for(2);

        assert!(engine.health().await.is_err());
        assert!(engine.health().await.is_err());
        assert!(engine.health().await.unwrap());
    }

    #[tokio::test]
    async fn test_index_document_is_idempotent_per_id() {
        let engine = FakeEngine::new();
        let doc = Document::new("title1", "content1", "article");

        engine.index_document("docs", 1, &doc).await.unwrap();
        engine.index_document("docs", 1, &doc).await.unwrap();

        assert_eq!(engine.document_count(), 1);
    }

    #[tokio::test]
    async fn test_search_respects_size_cap() {
        let engine = FakeEngine::new();
        for id in 1..=10 {
            let doc = Document::new(format!("t{id}"), format!("c{id}"), "article");
            engine.index_document("docs", id, &doc).await.unwrap();
        }

        let hits = engine
            .search("docs", json!({"query": {"match_all": {}}, "size": 3}))
            .await
            .unwrap();

        assert_eq!(hits.len(), 3);
    }
}
