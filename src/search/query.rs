// file: src/search/query.rs
// description: translation of request parameters into an engine query body
// reference: https://docs.opensearch.org/latest/query-dsl/

use crate::config::IndexConfig;
use serde_json::{Value, json};

/// Result size cap. No pagination; the page is whatever the engine
/// ranks into the first 25 hits.
pub const MAX_RESULTS: usize = 25;

/// Outcome of query translation. A filter value outside the allow-list
/// is not an error: it matches nothing, so no engine round-trip happens.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryPlan {
    MatchNone,
    Search(Value),
}

/// Build the engine request body from an optional free-text term and an
/// optional content-type filter. Clauses combine under `bool.must`; with
/// no clauses at all the query degrades to `match_all`.
pub fn build_query(term: &str, content_type: Option<&str>, index: &IndexConfig) -> QueryPlan {
    let mut must = Vec::new();

    if !term.is_empty() {
        must.push(json!({
            "multi_match": {
                "query": term,
                "fields": ["title", "content"]
            }
        }));
    }

    if let Some(content_type) = content_type {
        if !index.is_allowed_type(content_type) {
            return QueryPlan::MatchNone;
        }

        must.push(json!({ "term": { "content_type": content_type } }));
    }

    let query = if must.is_empty() {
        json!({ "match_all": {} })
    } else {
        json!({ "bool": { "must": must } })
    };

    QueryPlan::Search(json!({
        "query": query,
        "_source": ["title", "content"],
        "size": MAX_RESULTS
    }))
}
