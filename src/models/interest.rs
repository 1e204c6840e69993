//! Interest model

use serde::{Deserialize, Serialize};

/// A tag representing a stated hobby or topic, used for matching and display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    #[serde(deserialize_with = "super::opaque_id")]
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entry_with_numeric_id() {
        let json = r#"{"id": 4, "name": "Technology"}"#;
        let interest: Interest = serde_json::from_str(json).unwrap();
        assert_eq!(interest.id, "4");
        assert_eq!(interest.name, "Technology");
    }

    #[test]
    fn test_catalog_entry_with_string_id() {
        let json = r#"{"id": "4", "name": "Technology"}"#;
        let interest: Interest = serde_json::from_str(json).unwrap();
        assert_eq!(interest.id, "4");
    }
}
