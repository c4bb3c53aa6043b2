use serde::{Deserialize, Serialize};

/// A shopping cart, persisted in the `carts` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: String,
    #[serde(default)]
    pub products: Vec<CartItem>,
}

/// Quantity recorded against a product id. The product itself is not copied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: String,
    pub quantity: u32,
}

impl Cart {
    /// Adds `quantity` of `product_id`, merging into an existing line if present.
    pub fn add_product(&mut self, product_id: &str, quantity: u32) {
        match self.products.iter_mut().find(|item| item.product == product_id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.products.push(CartItem {
                product: product_id.to_string(),
                quantity,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_add_merges_into_one_line() {
        let mut cart = Cart { id: "c1".into(), products: Vec::new() };
        cart.add_product("p1", 2);
        cart.add_product("p2", 1);
        cart.add_product("p1", 3);

        assert_eq!(
            cart.products,
            vec![
                CartItem { product: "p1".into(), quantity: 5 },
                CartItem { product: "p2".into(), quantity: 1 },
            ]
        );
    }

    #[test]
    fn test_quantity_saturates() {
        let mut cart = Cart { id: "c1".into(), products: Vec::new() };
        cart.add_product("p1", u32::MAX);
        cart.add_product("p1", 1);
        assert_eq!(cart.products[0].quantity, u32::MAX);
    }
}
