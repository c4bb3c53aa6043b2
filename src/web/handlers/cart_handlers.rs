use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::web::error::{AppError, Result};
use crate::web::state::AppState;

fn default_quantity() -> u32 {
    1
}

#[derive(Deserialize, Debug)]
pub struct AddToCartPayload {
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

#[instrument(name = "handler::create_cart", skip(app_state))]
pub async fn create_cart_handler(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    let cart = app_state.carts.create_cart().await?;
    info!(cart_id = %cart.id, "Cart created");
    Ok(HttpResponse::Ok().json(cart))
}

#[instrument(name = "handler::get_cart", skip(app_state, path), fields(cart_id = %path.as_str()))]
pub async fn get_cart_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let cart = app_state.carts.get_cart(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(cart))
}

/// An empty body or a body without `quantity` adds a single unit.
#[instrument(
    name = "handler::add_product_to_cart",
    skip(app_state, path, body),
    fields(cart_id = %path.0, product_id = %path.1)
)]
pub async fn add_product_to_cart_handler(
    app_state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let (cart_id, product_id) = path.into_inner();
    let quantity = parse_quantity(&body)?;

    let cart = app_state.carts.add_product(cart_id, product_id, quantity).await?;
    info!(quantity, "Product added to cart");
    Ok(HttpResponse::Ok().json(cart))
}

fn parse_quantity(body: &[u8]) -> Result<u32> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(default_quantity());
    }
    serde_json::from_slice::<AddToCartPayload>(body)
        .map(|payload| payload.quantity)
        .map_err(|e| AppError::BadRequest(format!("Invalid cart body: {}", e)))
}
