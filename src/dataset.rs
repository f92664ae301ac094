//! Statement Dataset
//!
//! The statement list ships inside the binary as JSON.

use std::collections::HashSet;

use crate::error::DatasetError;
use crate::models::Item;

const BUNDLED_STATEMENTS: &str = include_str!("../data/statements.json");

/// Parse and validate a statement list
pub fn parse_items(json: &str) -> Result<Vec<Item>, DatasetError> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    if items.is_empty() {
        return Err(DatasetError::Empty);
    }

    let mut seen = HashSet::new();
    for (index, item) in items.iter().enumerate() {
        if item.id.trim().is_empty() {
            return Err(DatasetError::BlankId(index));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(DatasetError::DuplicateId(item.id.clone()));
        }
    }
    Ok(items)
}

pub fn bundled_items() -> Result<Vec<Item>, DatasetError> {
    parse_items(BUNDLED_STATEMENTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_items_load() {
        let items = bundled_items().unwrap();
        assert!(items.len() >= 2);
        assert!(items.iter().all(|i| !i.text.is_empty()));
    }

    #[test]
    fn test_parse_keeps_order() {
        let items = parse_items(r#"[{"id":"b","text":"B"},{"id":"a","text":"A"}]"#).unwrap();
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(parse_items("[]"), Err(DatasetError::Empty)));
    }

    #[test]
    fn test_rejects_blank_id() {
        let err = parse_items(r#"[{"id":"a","text":"A"},{"id":" ","text":"B"}]"#).unwrap_err();
        assert!(matches!(err, DatasetError::BlankId(1)));
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let err = parse_items(r#"[{"id":"a","text":"A"},{"id":"a","text":"B"}]"#).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateId(ref id) if id == "a"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(parse_items("{"), Err(DatasetError::Parse(_))));
        assert!(matches!(parse_items(r#"[{"id":"a"}]"#), Err(DatasetError::Parse(_))));
    }
}
