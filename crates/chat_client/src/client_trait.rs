use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ChatCompletionRequest, ChatCompletionResponse};

#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    async fn send_chat_completion_request(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}
