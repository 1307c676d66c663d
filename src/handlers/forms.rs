//! Form submission handler (`/save`).

use crate::context::AppContext;
use crate::error::Error;
use crate::http;
use crate::logger;
use crate::router::HandlerResult;
use hyper::body::Bytes;
use hyper::{Method, Request};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct SaveForm {
    #[serde(default)]
    name: String,
}

/// POST `/save`: echo the submitted `name` through the result view.
///
/// Any other method gets a 400 with a fixed body and no side effect.
/// The value is rendered without sanitization, matching the originals.
pub async fn save(req: Request<Bytes>, ctx: Arc<AppContext>) -> HandlerResult {
    if req.method() != Method::POST {
        return Err(Error::MethodNotAllowed);
    }

    let form: SaveForm = serde_urlencoded::from_bytes(req.body())?;
    logger::log_form_field("name", &form.name);

    let mut context = tera::Context::new();
    context.insert("name", &form.name);
    let html = ctx.templates.render("result.html", &context)?;
    Ok(http::build_html_response(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::Templates;
    use http_body_util::{BodyExt, Full};
    use hyper::{Response, StatusCode};

    fn context() -> Arc<AppContext> {
        Arc::new(AppContext::new(
            Templates::from_named(&[("result.html", "<p>Saved: {{ name }}</p>")]).unwrap(),
        ))
    }

    fn post_form(body: &str) -> Request<Bytes> {
        Request::builder()
            .method(Method::POST)
            .uri("/save")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Bytes::from(body.to_owned()))
            .unwrap()
    }

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn echoes_submitted_name() {
        let response = save(post_form("name=X"), context()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("X"));
    }

    #[tokio::test]
    async fn name_is_rendered_unescaped() {
        let response = save(post_form("name=%3Cb%3EX%3C%2Fb%3E"), context())
            .await
            .unwrap();
        assert!(body_string(response).await.contains("<b>X</b>"));
    }

    #[tokio::test]
    async fn missing_name_field_defaults_to_empty() {
        let response = save(post_form(""), context()).await.unwrap();
        assert_eq!(body_string(response).await, "<p>Saved: </p>");
    }

    #[tokio::test]
    async fn non_post_is_rejected() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/save")
            .body(Bytes::new())
            .unwrap();
        let err = save(request, context()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Bad Request");
    }

    #[tokio::test]
    async fn render_failure_is_a_server_error() {
        let ctx = Arc::new(AppContext::new(Templates::from_named(&[]).unwrap()));
        let err = save(post_form("name=X"), ctx).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
