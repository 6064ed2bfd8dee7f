//! Runs a batch of records through prompt building, the chat-completion call
//! and response formatting, one record at a time.

use chat_client::{ChatClientConfig, ChatClientError, ChatCompletionClient, ChatCompletionRequest};
use skill_core::{
    build_messages, format_response, InputRecord, OutputRecord, PromptTemplates, Scenario,
    SkillError, SkillResponse,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Skill(#[from] SkillError),

    #[error("Request failed: {0}")]
    Upstream(#[from] ChatClientError),
}

pub struct SkillService<'a> {
    client: &'a dyn ChatCompletionClient,
    config: &'a ChatClientConfig,
    templates: &'a PromptTemplates,
}

impl<'a> SkillService<'a> {
    pub fn new(
        client: &'a dyn ChatCompletionClient,
        config: &'a ChatClientConfig,
        templates: &'a PromptTemplates,
    ) -> Self {
        Self {
            client,
            config,
            templates,
        }
    }

    /// Process `records` in order. Always yields one output per input.
    pub async fn process_batch(&self, scenario: &str, records: &[InputRecord]) -> SkillResponse {
        let scenario = scenario.parse::<Scenario>().map_err(|err| err.to_string());
        let mut values = Vec::with_capacity(records.len());

        for record in records {
            let result = match &scenario {
                Ok(scenario) => self
                    .process_record(record, *scenario)
                    .await
                    .map_err(|err| err.to_string()),
                Err(message) => Err(message.clone()),
            };

            let output = result.unwrap_or_else(|message| {
                log::warn!("Record {} failed: {}", record.record_id, message);
                OutputRecord::failure(record.record_id.clone(), message)
            });
            values.push(output);
        }

        let failed = values.iter().filter(|output| output.is_error()).count();
        log::info!("Processed {} records, {} failed", values.len(), failed);

        SkillResponse { values }
    }

    pub async fn process_record(
        &self,
        record: &InputRecord,
        scenario: Scenario,
    ) -> Result<OutputRecord, RecordError> {
        tracing::debug!(record_id = %record.record_id, %scenario, "Processing record");

        let messages = build_messages(record, scenario, self.templates)?;
        let request = ChatCompletionRequest::for_deployment(self.config, messages);

        let response = self.client.send_chat_completion_request(request).await?;
        let text = response
            .first_content()
            .ok_or(ChatClientError::EmptyResponse)?;

        Ok(format_response(record, text, scenario))
    }
}
