//! Pages demo server: rendered templates, fixed-text endpoints, and
//! static assets. Listens on a fixed local port; no CLI arguments.

use std::sync::Arc;
use webdemo::{handlers, logger, server, AppContext, Router, Templates};

const ADDR: &str = "127.0.0.1:8080";
const TEMPLATE_GLOB: &str = "templates/*.html";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Templates are parsed once here; a broken template aborts startup.
    let templates = Templates::load(TEMPLATE_GLOB)?;
    let template_count = templates.len();
    let ctx = Arc::new(AppContext::new(templates));

    let router = Arc::new(
        Router::new()
            .route("/", handlers::pages::index)
            .route("/index", handlers::pages::index)
            .route("/hello", handlers::pages::hello)
            .route("/apple", handlers::pages::apple)
            .route("/html", handlers::pages::html)
            .route("/welcome", handlers::pages::welcome)
            .route("/about", handlers::pages::about)
            .route_prefix("/assets/", handlers::assets::serve),
    );

    let addr: std::net::SocketAddr = ADDR.parse()?;
    let listener = server::create_reusable_listener(addr)?;
    logger::log_server_start("Pages server", &addr, template_count);

    server::run(listener, router, ctx).await
}
