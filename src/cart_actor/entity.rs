use crate::actor_framework::Entity;
use crate::domain::Cart;
use super::actions::CartAction;

impl Entity for Cart {
    type Id = String;
    type CreatePayload = ();
    type Patch = (); // Carts are only changed through actions
    type Action = CartAction;
    type ActionResult = Cart;

    const COLLECTION: &'static str = "carts";
    const KIND: &'static str = "Cart";

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new, empty Cart.
    fn from_create(id: String, _params: ()) -> Self {
        Self {
            id,
            products: Vec::new(),
        }
    }

    fn on_update(&mut self, _patch: ()) {}

    /// Handles cart-specific actions and returns the cart as it stands afterwards.
    fn handle_action(&mut self, action: CartAction) -> Cart {
        match action {
            CartAction::AddProduct { product_id, quantity } => {
                self.add_product(&product_id, quantity);
            }
        }
        self.clone()
    }
}
