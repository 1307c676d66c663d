//! Server module entry point.
//!
//! Listener creation and the accept loop shared by both binaries.

pub mod connection;
pub mod listener;

pub use listener::create_reusable_listener;

use crate::context::AppContext;
use crate::logger;
use crate::router::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Accept connections forever, serving each on its own task.
///
/// Requests are independent and unordered with respect to each other;
/// there is no shared mutable state, no timeout, and no connection
/// limit. An accept error is logged and the loop continues.
pub async fn run(
    listener: TcpListener,
    router: Arc<Router>,
    ctx: Arc<AppContext>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                logger::log_connection_accepted(&peer_addr);
                connection::handle_connection(stream, Arc::clone(&router), Arc::clone(&ctx));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
