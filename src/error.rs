use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// The identifier parsed fine but no record carries it.
    #[error("{0}")]
    NotFound(String),

    /// The `{id}` path segment is not an integer. Treated like an unmatched route.
    #[error("malformed identifier: {0}")]
    MalformedIdentifier(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::MalformedIdentifier(_) => StatusCode::NOT_FOUND,
        }
    }

    fn public_message(&self) -> String {
        match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::MalformedIdentifier(_) => "Not found".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.public_message() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_resource_message() {
        let err = AppError::NotFound("Order not found".to_string());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Order not found");
    }

    #[test]
    fn malformed_identifier_looks_like_unknown_route() {
        let err = AppError::MalformedIdentifier("abc".to_string());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Not found");
    }
}
