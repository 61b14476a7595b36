// file: src/engine/mod.rs
// description: external search engine abstraction and OpenSearch implementation
// reference: https://docs.opensearch.org/latest/api-reference/

pub mod client;
pub mod mapping;

#[cfg(test)]
pub mod fake;

pub use client::{OpenSearchClient, SearchEngine};
pub use mapping::index_settings_and_mappings;
