// Connection handling module
// Serves a single accepted TCP connection on its own task

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::sync::Arc;

use crate::context::AppContext;
use crate::http;
use crate::logger;
use crate::router::Router;

/// Serve one connection in a spawned task.
///
/// Wraps the stream in `TokioIo`, enables HTTP/1.1 keep-alive, and
/// runs every request on the connection through the router.
pub fn handle_connection(stream: tokio::net::TcpStream, router: Arc<Router>, ctx: Arc<AppContext>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let router = Arc::clone(&router);
                let ctx = Arc::clone(&ctx);
                serve_request(req, router, ctx)
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}

/// Buffer the request body and dispatch through the router.
///
/// The demo bodies are small (form fields and single-file uploads),
/// so the whole body is collected before the handler runs. A body
/// read failure is a client error.
async fn serve_request(
    req: Request<Incoming>,
    router: Arc<Router>,
    ctx: Arc<AppContext>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    logger::log_request(req.method(), req.uri(), req.version());

    let (parts, body) = req.into_parts();
    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            return Ok(http::build_error_response(
                StatusCode::BAD_REQUEST,
                &e.to_string(),
            ));
        }
    };

    let response = router
        .dispatch(Request::from_parts(parts, bytes), ctx)
        .await;
    logger::log_response(response.status());
    Ok(response)
}
