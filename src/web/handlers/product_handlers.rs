use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domain::{ProductCreate, ProductPatch};
use crate::web::error::Result;
use crate::web::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
    pub limit: Option<usize>,
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(
    app_state: web::Data<AppState>,
    query: web::Query<ListProductsQuery>,
) -> Result<HttpResponse> {
    let products = app_state.products.list_products(query.limit).await?;
    info!(count = products.len(), "Products listed");
    Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn get_product_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let product = app_state.products.get_product(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::create_product", skip(app_state, body))]
pub async fn create_product_handler(
    app_state: web::Data<AppState>,
    body: web::Json<ProductCreate>,
) -> Result<HttpResponse> {
    let product = app_state.products.create_product(body.into_inner()).await?;
    info!(product_id = %product.id, "Product created");
    app_state.products_changed().await;
    Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::update_product", skip(app_state, path, body), fields(product_id = %path.as_str()))]
pub async fn update_product_handler(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ProductPatch>,
) -> Result<HttpResponse> {
    let product = app_state
        .products
        .update_product(path.into_inner(), body.into_inner())
        .await?;
    info!("Product updated");
    app_state.products_changed().await;
    Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn delete_product_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let product = app_state.products.delete_product(path.into_inner()).await?;
    info!("Product deleted");
    app_state.products_changed().await;
    Ok(HttpResponse::Ok().json(product))
}
