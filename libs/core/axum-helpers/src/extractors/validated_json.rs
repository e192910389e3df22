//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::Response,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Validates the request body using the `validator` crate's `Validate` trait.
/// Returns structured validation errors if validation fails.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct NewItem {
///     #[validate(length(min = 1, max = 200))]
///     title: String,
/// }
///
/// async fn create_item(ValidatedJson(payload): ValidatedJson<NewItem>) -> String {
///     format!("Creating item: {}", payload.title)
/// }
///
/// let app = Router::new().route("/items", post(create_item));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        use axum::response::IntoResponse;

        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode, header};
    use serde::Deserialize;

    #[derive(Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1))]
        title: String,
    }

    fn json_request(body: &str) -> Request {
        HttpRequest::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_payload_passes() {
        let req = json_request(r#"{"title":"Foo"}"#);
        let result = ValidatedJson::<Payload>::from_request(req, &()).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().0.title, "Foo");
    }

    #[tokio::test]
    async fn test_validation_failure_rejects_with_400() {
        let req = json_request(r#"{"title":""}"#);
        let result = ValidatedJson::<Payload>::from_request(req, &()).await;
        let response = result.err().expect("empty title must be rejected");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_rejects() {
        let req = json_request("{not json");
        let result = ValidatedJson::<Payload>::from_request(req, &()).await;
        assert!(result.is_err());
    }
}
