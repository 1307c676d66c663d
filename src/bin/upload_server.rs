//! Upload demo server: form submission, multipart file upload, and a
//! method-branching echo endpoint. Listens on a fixed local port; no
//! CLI arguments.

use std::sync::Arc;
use webdemo::{handlers, logger, server, AppContext, Router, Templates};

const ADDR: &str = "127.0.0.1:9000";
const TEMPLATE_GLOB: &str = "views/*.html";

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

    // The upload directory must exist before the first request.
    std::fs::create_dir_all(&ctx.upload_dir)?;

    let router = Arc::new(
        Router::new()
            .route("/", handlers::pages::index)
            .route("/save", handlers::forms::save)
            .route("/upload", handlers::upload::upload)
            .route("/test", handlers::echo::test),
    );

    let addr: std::net::SocketAddr = ADDR.parse()?;
    let listener = server::create_reusable_listener(addr)?;
    logger::log_server_start("Upload server", &addr, template_count);

    server::run(listener, router, ctx).await
}
