use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// JSON extractor that runs declarative validation after deserialization.
///
/// Deserialization failures surface as `BadRequest`; failed `validator`
/// rules surface as `ValidationErrors` with per-field messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(length(min = 3, max = 20, message = "Name must be between 3 and 20 characters"))]
        name: String,
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let request = json_request(r#"{"name":"testuser","email":"test@example.com"}"#);

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        assert!(result.is_ok());
        let ValidatedJson(body) = result.unwrap();
        assert_eq!(body.name, "testuser");
        assert_eq!(body.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_validation_error_short_name() {
        let request = json_request(r#"{"name":"ab","email":"test@example.com"}"#);

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "name");
                assert!(errors[0].message.contains("between 3 and 20 characters"));
            }
            other => panic!("Expected ValidationErrors error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_validation_error_invalid_email() {
        let request = json_request(r#"{"name":"testuser","email":"not-an-email"}"#);

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::ValidationErrors { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "email");
                assert!(errors[0].message.contains("Invalid email format"));
            }
            other => panic!("Expected ValidationErrors error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejection_missing_field() {
        let request = json_request(r#"{"name":"testuser"}"#);

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::BadRequest { message } => assert!(!message.is_empty()),
            other => panic!("Expected BadRequest error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejection_wrong_content_type() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(r#"{"name":"testuser","email":"test@example.com"}"#))
            .unwrap();

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::BadRequest { message } => assert!(!message.is_empty()),
            other => panic!("Expected BadRequest error, got {:?}", other),
        }
    }
}
