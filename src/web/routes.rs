use actix_web::web;

use super::handlers::{cart_handlers, product_handlers};

/// Registers the `/api/products` and `/api/carts` routes.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/products")
                    .route("", web::get().to(product_handlers::list_products_handler))
                    .route("", web::post().to(product_handlers::create_product_handler))
                    .route("/{pid}", web::get().to(product_handlers::get_product_handler))
                    .route("/{pid}", web::put().to(product_handlers::update_product_handler))
                    .route("/{pid}", web::delete().to(product_handlers::delete_product_handler)),
            )
            .service(
                web::scope("/carts")
                    .route("", web::post().to(cart_handlers::create_cart_handler))
                    .route("/{cid}", web::get().to(cart_handlers::get_cart_handler))
                    .route(
                        "/{cid}/product/{pid}",
                        web::post().to(cart_handlers::add_product_to_cart_handler),
                    ),
            ),
    );
}
