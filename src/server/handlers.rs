// file: src/server/handlers.rs
// description: request handlers for the HTML page and the JSON search API
// reference: https://docs.rs/axum

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

use crate::error::AppError;
use crate::models::SearchResult;
use crate::server::router::AppState;
use crate::server::templates::PageTemplate;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub content_type: Option<String>,
}

impl SearchParams {
    /// An empty `content_type=` from the HTML form means "no filter".
    fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref().filter(|t| !t.is_empty())
    }

    fn is_empty(&self) -> bool {
        self.q.is_empty() && self.content_type().is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: &'static str,
}

/// Engine failures surface as a 500 with a generic body; the cause is
/// logged and never leaked to the client.
#[derive(Debug)]
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Search request failed: {}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "engine_error",
                message: "search backend request failed",
            }),
        )
            .into_response()
    }
}

/// `GET /` renders the search page. With no query and no filter the
/// engine is not consulted at all: an untouched page is not the same as
/// a search that found nothing.
pub async fn home(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, ApiError> {
    let results = if params.is_empty() {
        Vec::new()
    } else {
        state.search.search(&params.q, params.content_type()).await?
    };

    let page = PageTemplate::index().render(
        &params.q,
        state.search.content_types(),
        params.content_type().unwrap_or_default(),
        &results,
    );

    Ok(Html(page))
}

/// `GET /api/search` always executes a search; with both parameters
/// empty that is a match-all over the index.
pub async fn api_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let results = state.search.search(&params.q, params.content_type()).await?;
    Ok(Json(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexConfig;
    use crate::engine::SearchEngine;
    use crate::engine::fake::FakeEngine;
    use crate::models::seed_documents;
    use crate::search::SearchService;
    use pretty_assertions::assert_eq;

    async fn seeded_state() -> (Arc<FakeEngine>, Arc<AppState>) {
        let engine = Arc::new(FakeEngine::new());
        for (i, doc) in seed_documents().iter().enumerate() {
            engine
                .index_document("docs", (i + 1) as u64, doc)
                .await
                .unwrap();
        }

        let search = SearchService::new(engine.clone(), IndexConfig::default());
        (engine, Arc::new(AppState { search }))
    }

    fn params(q: &str, content_type: Option<&str>) -> Query<SearchParams> {
        Query(SearchParams {
            q: q.to_string(),
            content_type: content_type.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_api_search_empty_params_returns_match_all() {
        let (_, state) = seeded_state().await;

        let Json(results) = api_search(State(state), params("", None)).await.unwrap();

        assert_eq!(results.len(), 5);
    }

    #[tokio::test]
    async fn test_api_search_finds_seeded_document() {
        let (_, state) = seeded_state().await;

        let Json(results) = api_search(State(state), params("content1", None))
            .await
            .unwrap();

        assert_eq!(results, vec![SearchResult::new("title1", "content1")]);
    }

    #[tokio::test]
    async fn test_api_search_unknown_type_returns_empty() {
        let (engine, state) = seeded_state().await;

        let Json(results) = api_search(State(state), params("content1", Some("podcast")))
            .await
            .unwrap();

        assert!(results.is_empty());
        assert_eq!(engine.search_calls(), 0);
    }

    #[tokio::test]
    async fn test_home_without_input_does_not_search() {
        let (engine, state) = seeded_state().await;

        let Html(page) = home(State(state), params("", Some(""))).await.unwrap();

        assert!(page.contains("No results"));
        assert_eq!(engine.search_calls(), 0);
    }

    #[tokio::test]
    async fn test_home_with_query_renders_hits() {
        let (_, state) = seeded_state().await;

        let Html(page) = home(State(state), params("content1", None)).await.unwrap();

        assert!(page.contains("<strong>title1</strong>"));
    }

    #[tokio::test]
    async fn test_home_renders_filter_options() {
        let (_, state) = seeded_state().await;

        let Html(page) = home(State(state), params("", Some("news"))).await.unwrap();

        for content_type in IndexConfig::default().content_types {
            assert!(page.contains(&format!("value=\"{content_type}\"")));
        }
        assert!(page.contains("value=\"news\" checked"));
    }
}
