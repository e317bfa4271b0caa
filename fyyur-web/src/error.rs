//! Error types for fyyur-web
//!
//! Read routes propagate failures as [`ApiError`], which renders the matching
//! error page. Write routes never surface errors this way; they turn every
//! failure into a notice (see [`crate::notice`]).

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::ui::pages;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// fyyur-common error
    #[error(transparent)]
    Common(#[from] fyyur_common::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Common(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Common(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = if status == StatusCode::NOT_FOUND {
            pages::not_found_page()
        } else {
            error!("Request failed: {}", self);
            pages::server_error_page()
        };

        (status, Html(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::NotFound("venue 1".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(fyyur_common::Error::NotFound("artist 2".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(fyyur_common::Error::Validation("name is required".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(fyyur_common::Error::Internal("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_renders_page() {
        let response = ApiError::NotFound("venue 9".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response.headers().get("content-type").unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }
}
