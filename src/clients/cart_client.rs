use tracing::{debug, instrument};
use crate::domain::Cart;
use crate::cart_actor::CartAction;
use crate::error::StoreError;
use crate::actor_framework::ResourceClient;

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl_basic_client!(CartClient, Cart, cart);

impl CartClient {
    #[instrument(skip(self))]
    pub async fn create_cart(&self) -> Result<Cart, StoreError> {
        debug!("Sending request");
        self.inner.create(()).await
    }

    /// Adds `quantity` of `product_id` to the cart, merging with an existing line.
    #[instrument(skip(self))]
    pub async fn add_product(&self, cart_id: String, product_id: String, quantity: u32) -> Result<Cart, StoreError> {
        debug!("Sending request");
        self.inner
            .perform_action(cart_id, CartAction::AddProduct { product_id, quantity })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_framework::{create_mock_client, expect_action, expect_get};

    #[tokio::test]
    async fn test_add_product_sends_action() {
        let (inner, mut receiver) = create_mock_client::<Cart>(10);
        let client = CartClient::new(inner);

        let task = tokio::spawn(async move { client.add_product("cart_1".into(), "product_9".into(), 4).await });

        let (cart_id, action, responder) = expect_action(&mut receiver).await.expect("Expected Cart Action");
        assert_eq!(cart_id, "cart_1");
        let mut cart = Cart { id: cart_id, products: Vec::new() };
        match action {
            CartAction::AddProduct { product_id, quantity } => {
                assert_eq!(product_id, "product_9");
                assert_eq!(quantity, 4);
                cart.add_product(&product_id, quantity);
            }
        }
        responder.send(Ok(cart.clone())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(cart));
    }

    #[tokio::test]
    async fn test_get_cart_uses_generated_method() {
        let (inner, mut receiver) = create_mock_client::<Cart>(10);
        let client = CartClient::new(inner);

        let task = tokio::spawn(async move { client.get_cart("cart_2".into()).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Cart Get");
        let cart = Cart { id, products: Vec::new() };
        responder.send(Ok(cart.clone())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(cart));
    }
}
