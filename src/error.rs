use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug)]
pub enum PageError {
    ReadError(std::io::Error),
    RenderError(tera::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: String,
    message: String,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            PageError::ReadError(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TemplateUnreadable",
                format!("Cannot read template: {}", e),
            ),
            PageError::RenderError(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TemplateRenderFailed",
                format!("Template rendering failed: {}", e),
            ),
        };

        let body = serde_json::to_string(&ErrorResponse {
            error: code.to_string(),
            code: code.to_string(),
            message,
        })
        .unwrap();

        (status, [("content-type", "application/json")], body).into_response()
    }
}

impl From<std::io::Error> for PageError {
    fn from(e: std::io::Error) -> Self {
        PageError::ReadError(e)
    }
}

impl From<tera::Error> for PageError {
    fn from(e: tera::Error) -> Self {
        PageError::RenderError(e)
    }
}
