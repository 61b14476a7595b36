// file: src/search/mod.rs
// description: search service combining query translation and result formatting
// reference: delegates all retrieval to the external engine

pub mod query;

pub use query::{MAX_RESULTS, QueryPlan, build_query};

use crate::config::IndexConfig;
use crate::engine::SearchEngine;
use crate::error::Result;
use crate::models::SearchResult;
use std::sync::Arc;
use tracing::debug;

/// Stateless per-request search path: translate the parameters, run the
/// engine query, format hits. Shares one engine client across requests.
#[derive(Clone)]
pub struct SearchService {
    engine: Arc<dyn SearchEngine>,
    index: IndexConfig,
}

impl SearchService {
    pub fn new(engine: Arc<dyn SearchEngine>, index: IndexConfig) -> Self {
        Self { engine, index }
    }

    pub fn content_types(&self) -> &[String] {
        &self.index.content_types
    }

    pub async fn search(
        &self,
        term: &str,
        content_type: Option<&str>,
    ) -> Result<Vec<SearchResult>> {
        let body = match build_query(term, content_type, &self.index) {
            QueryPlan::MatchNone => {
                debug!("Content type filter outside allow-list, skipping engine call");
                return Ok(Vec::new());
            }
            QueryPlan::Search(body) => body,
        };

        let sources = self.engine.search(&self.index.name, body).await?;

        // engine order is relevance order; never re-sorted here
        Ok(sources.iter().map(SearchResult::from_source).collect())
    }
}
