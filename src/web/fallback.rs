use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::api::json_error;

/// Router-level fallback: `404 {"error":"Not found"}`.
pub async fn not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, "Not found")
}

/// Method-level fallback for the resize routes: `405 {"error":"Method not allowed"}`.
pub async fn method_not_allowed() -> Response {
    json_error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// Plain `OPTIONS` requests that are not CORS preflights.
pub async fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn error_of(res: Response) -> String {
        let body = res.into_body().collect().await.unwrap().to_bytes();
        let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
        v["error"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn returns_404_with_json_body() {
        let response = not_found().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(error_of(response).await, "Not found");
    }

    #[tokio::test]
    async fn returns_405_with_json_body() {
        let response = method_not_allowed().await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(error_of(response).await, "Method not allowed");
    }

    #[tokio::test]
    async fn no_content_is_empty() {
        let response = no_content().await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}
