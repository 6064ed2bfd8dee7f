use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatClientError {
    #[error("Missing required environment variables: {0}")]
    Configuration(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Response contained no message content")]
    EmptyResponse,
}

pub type Result<T, E = ChatClientError> = std::result::Result<T, E>;
