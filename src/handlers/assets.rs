//! Static asset handler (`/assets/*`).
//!
//! Strips the route prefix, resolves the remainder under the assets
//! directory, and serves the file bytes verbatim with a Content-Type
//! detected from the extension.

use crate::context::AppContext;
use crate::error::Error;
use crate::http::{self, mime};
use crate::logger;
use crate::router::HandlerResult;
use hyper::body::Bytes;
use hyper::{Method, Request};
use std::path::Path;
use std::sync::Arc;
use tokio::fs;

/// GET `/assets/<path>`: serve a file from the assets directory.
pub async fn serve(req: Request<Bytes>, ctx: Arc<AppContext>) -> HandlerResult {
    if req.method() != Method::GET {
        return Err(Error::MethodNotAllowed);
    }

    match load_asset(&ctx.assets_dir, req.uri().path()).await {
        Some((content, content_type)) => Ok(http::build_file_response(content, content_type)),
        None => Ok(http::build_404_response()),
    }
}

/// Resolve `path` under `assets_dir` and read it.
///
/// `..` segments are stripped and the canonicalized result must stay
/// inside the assets directory; anything else is treated as not found.
async fn load_asset(assets_dir: &Path, path: &str) -> Option<(Vec<u8>, &'static str)> {
    let clean_path = path.trim_start_matches('/').replace("..", "");
    let relative_path = clean_path.strip_prefix("assets/").unwrap_or(&clean_path);
    let file_path = assets_dir.join(relative_path);

    let assets_dir_canonical = match assets_dir.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Assets directory not found or inaccessible '{}': {e}",
                assets_dir.display()
            ));
            return None;
        }
    };

    // File not found is an ordinary 404, not worth a warning.
    let file_path_canonical = file_path.canonicalize().ok()?;
    if !file_path_canonical.starts_with(&assets_dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }

    let content = fs::read(&file_path_canonical).await.ok()?;
    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}
