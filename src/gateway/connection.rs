use std::net::SocketAddr;

use futures_util::{Sink, SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::accept_async;
use tracing::{debug, error, info, instrument, warn};

use super::events::{ClientEvent, PushEvent};
use super::service::BroadcastClient;
use crate::clients::ProductClient;

/// Drives one push-channel connection until the peer leaves.
///
/// Outbound snapshots come from the subscriber slot handed out by the
/// gateway; inbound frames are product mutations.
#[instrument(name = "push_connection", skip(stream, peer, products, gateway), fields(%peer))]
pub(super) async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    products: ProductClient,
    gateway: BroadcastClient,
) {
    let ws = match accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            warn!(error = %e, "WebSocket handshake failed");
            return;
        }
    };
    let (mut sink, mut source) = ws.split();

    let mut subscription = match gateway.connect().await {
        Ok(subscription) => subscription,
        Err(e) => {
            error!(error = %e, "Failed to register subscriber");
            return;
        }
    };
    info!(connection_id = subscription.id, "Client connected");

    loop {
        tokio::select! {
            changed = subscription.events.changed() => {
                if changed.is_err() {
                    break;
                }
                let latest = subscription.events.borrow_and_update().clone();
                let Some(event) = latest else { continue };
                if let Err(e) = send_event(&mut sink, &event).await {
                    debug!(error = %e, "Failed to deliver event");
                    break;
                }
            }
            incoming = source.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    handle_client_event(text.as_str(), &products, &gateway).await;
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    debug!(error = %e, "Transport error");
                    break;
                }
            }
        }
    }

    gateway.disconnect(subscription.id).await;
    info!(connection_id = subscription.id, "Client disconnected");
}

async fn send_event<S>(sink: &mut S, event: &PushEvent) -> anyhow::Result<()>
where
    S: Sink<Message> + Unpin,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    let text = serde_json::to_string(event)?;
    sink.send(Message::text(text)).await?;
    Ok(())
}

/// Applies a client frame. Failures are logged; the push channel has no reply slot.
#[instrument(skip(text, products, gateway))]
pub(super) async fn handle_client_event(text: &str, products: &ProductClient, gateway: &BroadcastClient) {
    let event: ClientEvent = match serde_json::from_str(text) {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "Ignoring unparseable client frame");
            return;
        }
    };

    let changed = match event {
        ClientEvent::CreateProduct(incoming) => {
            if let Some(client_id) = &incoming.id {
                debug!(%client_id, "Ignoring client-supplied product id");
            }
            match products.create_product(incoming.fields).await {
                Ok(product) => {
                    info!(product_id = %product.id, "Product created from push channel");
                    true
                }
                Err(e) => {
                    error!(error = %e, "Push createProduct failed");
                    false
                }
            }
        }
        ClientEvent::DeleteProduct(id) => match products.delete_product(id).await {
            Ok(product) => {
                info!(product_id = %product.id, "Product deleted from push channel");
                true
            }
            Err(e) if e.is_not_found() => {
                debug!("Push deleteProduct for unknown id, nothing to do");
                false
            }
            Err(e) => {
                error!(error = %e, "Push deleteProduct failed");
                false
            }
        },
    };

    if changed {
        if let Err(e) = gateway.products_changed().await {
            error!(error = %e, "Failed to notify gateway");
        }
    }
}
