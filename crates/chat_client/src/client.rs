use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use skill_core::ChatMessage;

use crate::client_trait::ChatCompletionClient;
use crate::config::ChatClientConfig;
use crate::error::{ChatClientError, Result};
use crate::models::{ChatCompletionRequest, ChatCompletionResponse};

/// Chat-completion client for an Azure OpenAI deployment.
///
/// Transient failures (5xx, 429, timeouts, connection errors) are retried with
/// exponential backoff, up to `retry_attempts` extra attempts.
#[derive(Debug, Clone)]
pub struct AzureOpenAIClient {
    client: Arc<ClientWithMiddleware>,
    config: ChatClientConfig,
}

impl AzureOpenAIClient {
    pub fn new(config: ChatClientConfig) -> Result<Self> {
        let client = Self::build_http_client(&config)?;
        let retry_client = Self::build_retry_client(client, &config);
        Ok(Self {
            client: Arc::new(retry_client),
            config,
        })
    }

    fn build_http_client(config: &ChatClientConfig) -> Result<Client> {
        Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ChatClientError::from)
    }

    fn build_retry_client(client: Client, config: &ChatClientConfig) -> ClientWithMiddleware {
        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(config.retry_delay, config.retry_delay * 8)
            .build_with_max_retries(config.retry_attempts);

        ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build()
    }

    pub fn config(&self) -> &ChatClientConfig {
        &self.config
    }

    /// Request for `messages` using the configured deployment and sampling settings
    pub fn build_request(&self, messages: Vec<ChatMessage>) -> ChatCompletionRequest {
        ChatCompletionRequest::for_deployment(&self.config, messages)
    }
}

#[async_trait]
impl ChatCompletionClient for AzureOpenAIClient {
    async fn send_chat_completion_request(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let url = self.config.completions_url();
        info!(
            "Sending chat completion request with {} messages (images: {})",
            request.messages.len(),
            request.has_images()
        );

        let response = self
            .client
            .post(&url)
            .query(&[("api-version", self.config.api_version.as_str())])
            .header("api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send chat completion request: {}", e);
                ChatClientError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Chat completion request failed: HTTP {}: {}", status, body);
            return Err(ChatClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion = response.json::<ChatCompletionResponse>().await?;
        debug!(
            "Received chat completion {} with {} choices",
            completion.id,
            completion.choices.len()
        );
        Ok(completion)
    }
}
