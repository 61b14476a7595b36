// file: src/models/document.rs
// description: indexed document model and the fixed seed set
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub content: String,
    pub content_type: String,
}

impl Document {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            content_type: content_type.into(),
        }
    }
}

/// Fixed sample documents indexed when the target index is empty.
/// Document ids are assigned from position (1-based) at seed time.
pub fn seed_documents() -> Vec<Document> {
    vec![
        Document::new("title1", "content1", "article"),
        Document::new("title2", "content2", "news"),
        Document::new("title3", "content3", "blog"),
        Document::new("title4", "content4", "report"),
        Document::new("title5", "content5", "article"),
    ]
}
