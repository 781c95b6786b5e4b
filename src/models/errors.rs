use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures while turning page props into a document.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to render page template: {0}")]
    Render(#[from] minijinja::Error),
    #[error("failed to serialize page data: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "page rendering failed");
        metrics::counter!("feedback_pages_render_failures_total").increment(1);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} value {value:?}, expected a port number")]
    InvalidPort { name: &'static str, value: String },
    #[error("invalid WRAPPER_PRESET value {0:?}, expected A or B")]
    InvalidPreset(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;
    use crate::models::wrapper_models::WrapperPreset;
    use crate::services::render::PageRenderer;

    #[tokio::test]
    async fn render_failure_becomes_plain_500() {
        let renderer = PageRenderer::new(WrapperPreset::A).unwrap();
        let err = renderer.render_page("missing.html", &json!({})).unwrap_err();

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Internal Server Error");
    }

    #[tokio::test]
    async fn serialize_failure_becomes_plain_500() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

        let response = AppError::from(source).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Internal Server Error");
    }
}
