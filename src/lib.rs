// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod bootstrap;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod search;
pub mod server;
pub mod utils;

pub use config::{BootstrapConfig, Config, EngineConfig, IndexConfig, ServerConfig};
pub use engine::{OpenSearchClient, SearchEngine, index_settings_and_mappings};
pub use error::{AppError, Result};
pub use models::{Document, SNIPPET_MAX_CHARS, SearchResult, seed_documents};
pub use search::{MAX_RESULTS, QueryPlan, SearchService, build_query};
pub use server::{AppState, PageTemplate, create_router};
