//! Shared plumbing for the two demo servers.
//!
//! The `pages-server` and `upload-server` binaries compose their own
//! routers out of the handlers in this crate and run them on the
//! common hyper/tokio server loop. There is no shared state between
//! requests; every handler runs to completion and writes a response.

pub mod context;
pub mod error;
pub mod handlers;
pub mod http;
pub mod logger;
pub mod router;
pub mod server;
pub mod templates;

pub use context::AppContext;
pub use error::Error;
pub use router::Router;
pub use templates::Templates;
