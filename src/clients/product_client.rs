use tracing::{debug, instrument};
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::error::StoreError;
use crate::actor_framework::ResourceClient;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, product);

impl ProductClient {
    /// Lists products in persisted order, keeping only the first `limit` when given.
    #[instrument(skip(self))]
    pub async fn list_products(&self, limit: Option<usize>) -> Result<Vec<Product>, StoreError> {
        debug!("Sending request");
        self.inner.list(limit).await
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, product: ProductCreate) -> Result<Product, StoreError> {
        debug!("Sending request");
        self.inner.create(product).await
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, id: String, patch: ProductPatch) -> Result<Product, StoreError> {
        debug!("Sending request");
        self.inner.update(id, patch).await
    }

    /// Removes a product and returns it as it was before removal.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: String) -> Result<Product, StoreError> {
        debug!("Sending request");
        self.inner.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::Entity;
    use crate::mock_framework::{create_mock_client, expect_create, expect_delete, expect_list};

    #[tokio::test]
    async fn test_create_product_forwards_payload() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let task = tokio::spawn(async move { client.create_product(ProductCreate::titled("Mug")).await });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.title.as_deref(), Some("Mug"));
        let created = Product::from_create("product_1".into(), payload);
        responder.send(Ok(created.clone())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(created));
    }

    #[tokio::test]
    async fn test_list_products_forwards_limit() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let task = tokio::spawn(async move { client.list_products(Some(3)).await });

        let (limit, responder) = expect_list(&mut receiver).await.expect("Expected List request");
        assert_eq!(limit, Some(3));
        responder.send(Ok(Vec::new())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(Vec::new()));
    }

    #[tokio::test]
    async fn test_delete_product_passes_through_not_found() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let task = tokio::spawn(async move { client.delete_product("missing".into()).await });

        let (id, responder) = expect_delete(&mut receiver).await.expect("Expected Delete request");
        assert_eq!(id, "missing");
        responder
            .send(Err(StoreError::NotFound { kind: Product::KIND, id }))
            .unwrap();

        assert!(task.await.unwrap().unwrap_err().is_not_found());
    }
}
