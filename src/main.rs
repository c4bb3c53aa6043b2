mod domain;
mod clients;
mod messages;

mod app_system;
mod gateway;
mod web;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod record_store;
mod error;
mod product_actor;
mod cart_actor;

use std::time::Duration;

use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{web as actix_data, App, HttpServer};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

use crate::app_system::{setup_tracing, AppConfig, StoreSystem};
use crate::record_store::RecordStore;
use crate::web::{configure_app_routes, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = AppConfig::from_env()?;

    info!(data_dir = %config.data_dir.display(), "Starting storefront");
    let system = StoreSystem::start(RecordStore::new(&config.data_dir), config.channel_buffer).await?;

    let push_listener = TcpListener::bind(config.push_address()).await?;
    let push_server = tokio::spawn(gateway::serve(
        push_listener,
        system.product_client.clone(),
        system.gateway_client.clone(),
    ));

    let app_state = AppState::new(&system, config.broadcast_rest_mutations);
    info!(address = %config.http_address(), "Binding HTTP server");
    HttpServer::new(move || {
        App::new()
            .app_data(actix_data::Data::new(app_state.clone()))
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(TracingLogger::default())
            .configure(configure_app_routes)
    })
    .bind(config.http_address())?
    .run()
    .await?;

    push_server.abort();
    let _ = push_server.await;
    match tokio::time::timeout(Duration::from_secs(5), system.shutdown()).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!(error = %e, "Actors did not stop cleanly"),
        Err(_) => warn!("Timed out waiting for actors to stop"),
    }
    Ok(())
}
