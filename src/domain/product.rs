use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A catalog entry, persisted in the `products` collection.
///
/// Caller-supplied fields are optional and stored as given; fields that were
/// never supplied are omitted from the persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Kept in the numeric form it arrived in, so `10` is written back as `10`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Number>,
    #[serde(default)]
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub thumbnails: Vec<String>,
}

/// Payload for creating a new product. Any `id` in the input is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductCreate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub price: Option<Number>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub thumbnails: Vec<String>,
}

/// Partial overwrite of an existing product. Only named fields change.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub price: Option<Number>,
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub thumbnails: Option<Vec<String>>,
}

#[cfg(test)]
impl ProductCreate {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_record_is_rewritten_unchanged() {
        for text in [
            r#"{"id":"p1","price":10,"status":true,"thumbnails":[]}"#,
            r#"{"id":"p2","title":"Lamp","price":10.0,"status":false,"stock":-1,"thumbnails":["a.png"]}"#,
            r#"{"id":"p3","price":12.75,"status":true,"thumbnails":[]}"#,
        ] {
            let product: Product = serde_json::from_str(text).unwrap();
            assert_eq!(serde_json::to_string(&product).unwrap(), text);
        }
    }
}
