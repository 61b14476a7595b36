// file: src/models/mod.rs
// description: data model module exports
// reference: internal data structures

pub mod document;
pub mod search_result;

pub use document::{Document, seed_documents};
pub use search_result::{SNIPPET_MAX_CHARS, SearchResult};
