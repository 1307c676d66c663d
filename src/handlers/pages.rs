//! Template and fixed-text page handlers.

use crate::context::AppContext;
use crate::http;
use crate::router::HandlerResult;
use hyper::body::Bytes;
use hyper::Request;
use std::sync::Arc;

/// GET `/` and `/index`: rendered greeting page.
pub async fn index(_req: Request<Bytes>, ctx: Arc<AppContext>) -> HandlerResult {
    let html = ctx.templates.render("index.html", &tera::Context::new())?;
    Ok(http::build_html_response(html))
}

/// GET `/hello`: fixed text.
pub async fn hello(_req: Request<Bytes>, _ctx: Arc<AppContext>) -> HandlerResult {
    Ok(http::build_text_response("Hello, World!".to_string()))
}

/// GET `/apple`: fixed text.
pub async fn apple(_req: Request<Bytes>, _ctx: Arc<AppContext>) -> HandlerResult {
    Ok(http::build_text_response(
        "An apple a day keeps the doctor away".to_string(),
    ))
}

/// GET `/html`: rendered template with title/name context.
pub async fn html(_req: Request<Bytes>, ctx: Arc<AppContext>) -> HandlerResult {
    let mut context = tera::Context::new();
    context.insert("title", "Template Demo");
    context.insert("name", "Visitor");
    let html = ctx.templates.render("html.html", &context)?;
    Ok(http::build_html_response(html))
}

/// GET `/welcome`: rendered named template.
pub async fn welcome(_req: Request<Bytes>, ctx: Arc<AppContext>) -> HandlerResult {
    let html = ctx.templates.render("welcome.html", &tera::Context::new())?;
    Ok(http::build_html_response(html))
}

/// GET `/about`: rendered named template.
pub async fn about(_req: Request<Bytes>, ctx: Arc<AppContext>) -> HandlerResult {
    let html = ctx.templates.render("about.html", &tera::Context::new())?;
    Ok(http::build_html_response(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::Templates;
    use http_body_util::{BodyExt, Full};
    use hyper::{Response, StatusCode};

    fn context_with(sources: &[(&str, &str)]) -> Arc<AppContext> {
        Arc::new(AppContext::new(Templates::from_named(sources).unwrap()))
    }

    fn get(path: &str) -> Request<Bytes> {
        Request::builder().uri(path).body(Bytes::new()).unwrap()
    }

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn hello_returns_fixed_text() {
        let response = hello(get("/hello"), context_with(&[])).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "Hello, World!");
    }

    #[tokio::test]
    async fn apple_returns_fixed_text() {
        let response = apple(get("/apple"), context_with(&[])).await.unwrap();
        assert_eq!(
            body_string(response).await,
            "An apple a day keeps the doctor away"
        );
    }

    #[tokio::test]
    async fn index_renders_template() {
        let ctx = context_with(&[("index.html", "<h1>Welcome home</h1>")]);
        let response = index(get("/"), ctx).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["Content-Type"],
            "text/html; charset=utf-8"
        );
        assert_eq!(body_string(response).await, "<h1>Welcome home</h1>");
    }

    #[tokio::test]
    async fn html_renders_title_and_name() {
        let ctx = context_with(&[("html.html", "<title>{{ title }}</title>{{ name }}")]);
        let response = html(get("/html"), ctx).await.unwrap();
        let body = body_string(response).await;
        assert!(body.contains("Template Demo"));
        assert!(body.contains("Visitor"));
    }

    #[tokio::test]
    async fn missing_template_is_a_server_error() {
        let err = index(get("/"), context_with(&[])).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
