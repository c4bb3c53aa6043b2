use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductPatch};

impl Entity for Product {
    type Id = String;
    type CreatePayload = ProductCreate;
    type Patch = ProductPatch;
    type Action = ();
    type ActionResult = ();

    const COLLECTION: &'static str = "products";
    const KIND: &'static str = "Product";

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Product from creation parameters.
    ///
    /// # Notes
    /// New products always start with `status = true`.
    fn from_create(id: String, params: ProductCreate) -> Self {
        Self {
            id,
            title: params.title,
            description: params.description,
            code: params.code,
            price: params.price,
            status: true,
            stock: params.stock,
            category: params.category,
            thumbnails: params.thumbnails,
        }
    }

    /// Overlays the named fields of `patch`. The id is never touched.
    fn on_update(&mut self, patch: ProductPatch) {
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(code) = patch.code {
            self.code = Some(code);
        }
        if let Some(price) = patch.price {
            self.price = Some(price);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(stock) = patch.stock {
            self.stock = Some(stock);
        }
        if let Some(category) = patch.category {
            self.category = Some(category);
        }
        if let Some(thumbnails) = patch.thumbnails {
            self.thumbnails = thumbnails;
        }
    }

    /// Products have no custom actions.
    fn handle_action(&mut self, _action: ()) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;

    fn sample() -> Product {
        Product::from_create(
            "p1".into(),
            ProductCreate {
                title: Some("Lamp".into()),
                description: Some("Desk lamp".into()),
                code: Some("L-1".into()),
                price: Number::from_f64(25.5),
                stock: Some(4),
                category: Some("home".into()),
                thumbnails: vec!["lamp.png".into()],
            },
        )
    }

    #[test]
    fn test_create_sets_status() {
        let product = sample();
        assert!(product.status);
        assert_eq!(product.id, "p1");
        assert_eq!(product.thumbnails, vec!["lamp.png".to_string()]);
    }

    #[test]
    fn test_update_changes_only_named_fields() {
        let original = sample();
        let mut product = original.clone();
        product.on_update(ProductPatch {
            price: Some(Number::from(30)),
            status: Some(false),
            ..ProductPatch::default()
        });

        assert_eq!(product.price, Some(Number::from(30)));
        assert!(!product.status);
        assert_eq!(
            Product { price: original.price.clone(), status: original.status, ..product },
            original
        );
    }

    #[test]
    fn test_patch_ignores_id_in_body() {
        let patch: ProductPatch = serde_json::from_str(r#"{"id": "hijack", "stock": 9}"#).unwrap();
        let mut product = sample();
        product.on_update(patch);

        assert_eq!(product.id, "p1");
        assert_eq!(product.stock, Some(9));
    }

    #[test]
    fn test_absent_fields_are_omitted_when_persisted() {
        let product = Product::from_create("p2".into(), ProductCreate::titled("Bare"));
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": "p2", "title": "Bare", "status": true, "thumbnails": []})
        );
    }
}
