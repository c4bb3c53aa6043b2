//! Push channel: subscriber registry, fan-out of product snapshots, and the
//! WebSocket transport that feeds it.

mod events;
mod service;
mod connection;
mod server;

pub use events::PushEvent;
pub use service::{BroadcastClient, BroadcastService};
pub use server::serve;
