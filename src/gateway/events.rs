use serde::{Deserialize, Serialize};

use crate::domain::{Product, ProductCreate};

/// Server → client frames.
///
/// Encoded as `{"event": "products", "data": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum PushEvent {
    Products(Vec<Product>),
}

/// Client → server frames.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    CreateProduct(IncomingProduct),
    DeleteProduct(String),
}

/// A product record as sent by a push client.
///
/// The id is read only so it can be reported; the server always assigns its own.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IncomingProduct {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: ProductCreate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_frame_shape() {
        let frame = serde_json::to_value(PushEvent::Products(Vec::new())).unwrap();
        assert_eq!(frame, serde_json::json!({"event": "products", "data": []}));
    }

    #[test]
    fn test_parse_create_product_with_client_id() {
        let text = r#"{"event":"createProduct","data":{"id":"client-7","title":"Chair","price":12.5,"thumbnails":["a.png"]}}"#;
        let event: ClientEvent = serde_json::from_str(text).unwrap();

        match event {
            ClientEvent::CreateProduct(incoming) => {
                assert_eq!(incoming.id.as_deref(), Some("client-7"));
                assert_eq!(incoming.fields.title.as_deref(), Some("Chair"));
                assert_eq!(incoming.fields.price, serde_json::Number::from_f64(12.5));
                assert_eq!(incoming.fields.thumbnails, vec!["a.png".to_string()]);
            }
            other => panic!("Unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_parse_delete_product() {
        let event: ClientEvent = serde_json::from_str(r#"{"event":"deleteProduct","data":"p-1"}"#).unwrap();
        assert_eq!(event, ClientEvent::DeleteProduct("p-1".into()));
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        assert!(serde_json::from_str::<ClientEvent>(r#"{"event":"dropTables","data":null}"#).is_err());
    }
}
