//! Builds the chat messages sent to the model for one record.

use crate::error::{Result, SkillError};
use crate::message::{ChatMessage, Content, ContentPart};
use crate::record::InputRecord;
use crate::scenario::Scenario;
use crate::templates::PromptTemplates;

/// Build `[system, user]` messages for `record` under `scenario`.
///
/// Text scenarios require `data.text`. Image scenarios never fail on missing
/// image fields; they substitute empty strings into the data URI.
pub fn build_messages(
    record: &InputRecord,
    scenario: Scenario,
    templates: &PromptTemplates,
) -> Result<Vec<ChatMessage>> {
    let system_prompt = templates
        .get(scenario)
        .ok_or_else(|| SkillError::UnknownScenario(scenario.to_string()))?;

    if !scenario.is_image() {
        let text = record.text().ok_or(SkillError::MissingField("data.text"))?;
        return Ok(vec![
            ChatMessage::system(system_prompt),
            ChatMessage::user(text),
        ]);
    }

    let (content_type, data) = record.image();
    if content_type.is_empty() || data.is_empty() {
        log::warn!(
            "Record {} has incomplete image payload, sending empty fields",
            record.record_id
        );
    }
    Ok(vec![
        ChatMessage::system(Content::Parts(vec![ContentPart::text(system_prompt)])),
        ChatMessage::user(Content::Parts(vec![ContentPart::image_base64(
            content_type,
            data,
        )])),
    ])
}
