//! Method-branching echo handler (`/test`).

use crate::context::AppContext;
use crate::error::Error;
use crate::http;
use crate::router::HandlerResult;
use hyper::body::Bytes;
use hyper::{Method, Request};
use std::sync::Arc;

/// GET/POST `/test`: fixed text per method, 400 otherwise.
pub async fn test(req: Request<Bytes>, _ctx: Arc<AppContext>) -> HandlerResult {
    match *req.method() {
        Method::GET => {
            let x = 10;
            Ok(http::build_text_response(format!("You got this {x}")))
        }
        Method::POST => Ok(http::build_text_response("You posted this".to_string())),
        _ => Err(Error::MethodNotAllowed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::Templates;
    use http_body_util::{BodyExt, Full};
    use hyper::{Response, StatusCode};

    fn context() -> Arc<AppContext> {
        Arc::new(AppContext::new(Templates::from_named(&[]).unwrap()))
    }

    fn request(method: Method) -> Request<Bytes> {
        Request::builder()
            .method(method)
            .uri("/test")
            .body(Bytes::new())
            .unwrap()
    }

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn get_returns_formatted_text() {
        let response = test(request(Method::GET), context()).await.unwrap();
        assert_eq!(body_string(response).await, "You got this 10");
    }

    #[tokio::test]
    async fn post_returns_fixed_text() {
        let response = test(request(Method::POST), context()).await.unwrap();
        assert_eq!(body_string(response).await, "You posted this");
    }

    #[tokio::test]
    async fn other_methods_are_rejected() {
        for method in [Method::PUT, Method::DELETE, Method::PATCH] {
            let err = test(request(method), context()).await.unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }
}
