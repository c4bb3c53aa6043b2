use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

use super::connection::handle_connection;
use super::service::BroadcastClient;
use crate::clients::ProductClient;

/// Accepts push-channel connections forever, one task per connection.
#[instrument(name = "push_server", skip_all)]
pub async fn serve(listener: TcpListener, products: ProductClient, gateway: BroadcastClient) {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Push channel listening");
    }

    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                tokio::spawn(handle_connection(stream, peer, products.clone(), gateway.clone()));
            }
            Err(e) => warn!(error = %e, "Failed to accept push connection"),
        }
    }
}
