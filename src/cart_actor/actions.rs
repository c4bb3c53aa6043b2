/// Custom actions for Cart entities.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds a quantity of a product to the cart.
    ///
    /// The product id is taken as given; it is not checked against the
    /// product collection.
    AddProduct { product_id: String, quantity: u32 },
}
