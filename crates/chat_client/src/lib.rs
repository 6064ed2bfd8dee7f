pub mod client;
pub mod client_trait;
pub mod config;
pub mod error;
pub mod models;

pub use client::AzureOpenAIClient;
pub use client_trait::ChatCompletionClient;
pub use config::ChatClientConfig;
pub use error::{ChatClientError, Result};
pub use models::{ChatCompletionRequest, ChatCompletionResponse};
