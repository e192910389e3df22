use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Error kinds surfaced by the item service.
///
/// The service performs zero local recovery: every backend error is
/// surfaced verbatim with its kind preserved, and the HTTP layer maps
/// each kind to a status code via [`AppError`].
#[derive(Debug, Error)]
pub enum ItemError {
    /// No document exists for the identifier (get, delete)
    #[error("item not found: {0}")]
    NotFound(String),

    /// Caller-provided query or document is structurally invalid per
    /// the backend schema
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Transport/connectivity failure to the search backend
    #[error("search backend unavailable: {0}")]
    Unavailable(String),

    /// Any other backend-reported failure (e.g. indexing conflict)
    #[error("search backend error: {0}")]
    Backend(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(id) => AppError::NotFound(format!("Item {} not found", id)),
            ItemError::BadRequest(msg) => AppError::BadRequest(msg),
            ItemError::Unavailable(msg) => AppError::ServiceUnavailable(msg),
            ItemError::Backend(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_response_is_404() {
        let response = ItemError::NotFound("abc123".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_request_response_is_400() {
        let response = ItemError::BadRequest("malformed query".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unavailable_response_is_503() {
        let response = ItemError::Unavailable("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_backend_response_is_500() {
        let response = ItemError::Backend("version conflict".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_message_includes_id() {
        let app_error: AppError = ItemError::NotFound("abc123".to_string()).into();
        assert!(app_error.to_string().contains("abc123"));
    }
}
