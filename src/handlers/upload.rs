//! Multipart file-upload handler (`/upload`).
//!
//! Accepts a multipart form with a `file` part and an optional
//! `alias` text field, and persists the file bytes under the upload
//! directory. A non-empty alias renames the file to the alias plus
//! the original extension (suffix after the last dot, dot included,
//! case preserved). Concurrent uploads resolving to the same name
//! race: the last writer wins, and a failed copy may leave a
//! truncated file behind. Neither is mitigated here.

use crate::context::AppContext;
use crate::error::Error;
use crate::http;
use crate::logger;
use crate::router::HandlerResult;
use hyper::body::Bytes;
use hyper::header::CONTENT_TYPE;
use hyper::{Method, Request};
use multer::Multipart;
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// POST `/upload`: persist the uploaded file, then render the done view.
pub async fn upload(req: Request<Bytes>, ctx: Arc<AppContext>) -> HandlerResult {
    if req.method() != Method::POST {
        return Err(Error::MethodNotAllowed);
    }

    let boundary = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(multer::parse_boundary)
        .transpose()?
        .ok_or(Error::NotMultipart)?;

    let (alias, file) = read_form(req.into_body(), boundary).await?;
    let (original, data) = file.ok_or(Error::MissingFilePart)?;

    let filename = destination_name(&original, &alias);
    let dest = ctx.upload_dir.join(&filename);

    // Create-or-truncate; an existing file of the same name is clobbered.
    let mut target = fs::File::create(&dest).await?;
    target.write_all(&data).await?;
    target.flush().await?;

    logger::log_upload(&original, &filename);

    let html = ctx
        .templates
        .render("done_upload.html", &tera::Context::new())?;
    Ok(http::build_html_response(html))
}

/// Walk the multipart fields, collecting the alias text and the file part.
async fn read_form(
    body: Bytes,
    boundary: String,
) -> Result<(String, Option<(String, Bytes)>), Error> {
    let stream =
        futures_util::stream::once(async move { Ok::<Bytes, std::convert::Infallible>(body) });
    let mut multipart = Multipart::new(stream, boundary);

    let mut alias = String::new();
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("alias") => alias = field.text().await?,
            Some("file") => {
                let original = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                file = Some((original, data));
            }
            // Unknown parts are read and discarded.
            _ => {
                field.bytes().await?;
            }
        }
    }

    Ok((alias, file))
}

/// Choose the stored filename: alias plus original extension when an
/// alias was given, the original filename verbatim otherwise.
fn destination_name(original: &str, alias: &str) -> String {
    if alias.is_empty() {
        original.to_string()
    } else {
        format!("{alias}{}", file_suffix(original))
    }
}

/// Suffix of `filename` from the last dot, dot included; empty when
/// there is no dot. Case is preserved verbatim.
fn file_suffix(filename: &str) -> &str {
    filename
        .rfind('.')
        .map_or("", |index| &filename[index..])
}
