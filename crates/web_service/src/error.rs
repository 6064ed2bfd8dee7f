use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use chat_client::ChatClientError;
use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<ChatClientError> for AppError {
    fn from(err: ChatClientError) -> Self {
        match err {
            ChatClientError::Configuration(_) => AppError::Configuration(err.to_string()),
            other => AppError::InternalError(other.into()),
        }
    }
}

#[derive(Serialize)]
struct JsonError {
    detail: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(JsonError {
            detail: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Configuration("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::InternalError(anyhow::anyhow!("x")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_configuration_error_from_client() {
        let err = AppError::from(ChatClientError::Configuration("AZURE_OPENAI_KEY".into()));
        assert!(matches!(err, AppError::Configuration(_)));
        assert_eq!(
            err.to_string(),
            "Missing required environment variables: AZURE_OPENAI_KEY"
        );
    }

    #[test]
    fn test_error_body_has_detail() {
        let response = AppError::BadRequest("Missing scenario".into()).error_response();
        let bytes = response.into_body().try_into_bytes().unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"detail": "Missing scenario"}));
    }
}
