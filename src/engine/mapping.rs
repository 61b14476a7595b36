// file: src/engine/mapping.rs
// description: fixed index settings and field mappings
// reference: https://docs.opensearch.org/latest/field-types/

use serde_json::{Value, json};

/// Index body used at create time. The mapping is fixed: `title` and
/// `content` are analyzed full-text fields, `content_type` is a keyword
/// so the filter matches exactly.
pub fn index_settings_and_mappings() -> Value {
    json!({
        "settings": {
            "index": {
                "number_of_shards": 1,
                "number_of_replicas": 0
            }
        },
        "mappings": {
            "properties": {
                "title":        { "type": "text" },
                "content":      { "type": "text" },
                "content_type": { "type": "keyword" }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_has_exactly_three_fields() {
        let body = index_settings_and_mappings();
        let properties = body["mappings"]["properties"].as_object().unwrap();

        assert_eq!(properties.len(), 3);
        assert_eq!(properties["title"]["type"], "text");
        assert_eq!(properties["content"]["type"], "text");
        assert_eq!(properties["content_type"]["type"], "keyword");
    }

    #[test]
    fn test_single_shard_no_replicas() {
        let body = index_settings_and_mappings();

        assert_eq!(body["settings"]["index"]["number_of_shards"], 1);
        assert_eq!(body["settings"]["index"]["number_of_replicas"], 0);
    }
}
