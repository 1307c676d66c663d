//! Request routing dispatch module.
//!
//! An explicitly constructed router instance replaces any process-wide
//! handler registry: each binary builds its own `Router`, registers
//! its handlers, and hands it to the server loop. Dispatch is by exact
//! path first, then by registered prefix (for static assets); unknown
//! paths get a 404. Handlers branch on the HTTP method themselves.

use crate::context::AppContext;
use crate::error::Error;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Outcome of one handler invocation.
pub type HandlerResult = Result<Response<Full<Bytes>>, Error>;

/// Boxed future returned by a route handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = HandlerResult> + Send>>;

/// A handler bound to a path: takes the buffered request and the
/// shared context, produces a response or an error.
pub type HandlerFn = Arc<dyn Fn(Request<Bytes>, Arc<AppContext>) -> HandlerFuture + Send + Sync>;

/// Path-to-handler table for one server.
#[derive(Default)]
pub struct Router {
    exact: HashMap<String, HandlerFn>,
    prefixes: Vec<(String, HandlerFn)>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an exact path match.
    #[must_use]
    pub fn route<F, Fut>(mut self, path: &str, handler: F) -> Self
    where
        F: Fn(Request<Bytes>, Arc<AppContext>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.exact
            .insert(path.to_string(), Arc::new(move |req, ctx| Box::pin(handler(req, ctx))));
        self
    }

    /// Register a handler for all paths under `prefix`.
    #[must_use]
    pub fn route_prefix<F, Fut>(mut self, prefix: &str, handler: F) -> Self
    where
        F: Fn(Request<Bytes>, Arc<AppContext>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.prefixes
            .push((prefix.to_string(), Arc::new(move |req, ctx| Box::pin(handler(req, ctx)))));
        self
    }

    /// Dispatch a request to the matching handler.
    ///
    /// Handler errors are mapped to a status through the error
    /// taxonomy and the raw error string becomes the response body.
    pub async fn dispatch(
        &self,
        req: Request<Bytes>,
        ctx: Arc<AppContext>,
    ) -> Response<Full<Bytes>> {
        let path = req.uri().path().to_string();

        let handler = self.exact.get(&path).or_else(|| {
            self.prefixes
                .iter()
                .find(|(prefix, _)| path.starts_with(prefix.as_str()))
                .map(|(_, handler)| handler)
        });

        match handler {
            Some(handler) => match handler(req, ctx).await {
                Ok(response) => response,
                Err(err) => {
                    logger::log_error(&format!("handler failed on {path}: {err}"));
                    http::build_error_response(err.status(), &err.to_string())
                }
            },
            None => http::build_404_response(),
        }
    }
}
