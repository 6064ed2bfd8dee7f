//! Shapes the model's reply into an [`OutputRecord`].

use serde_json::{json, Value};

use crate::record::{InputRecord, OutputRecord};
use crate::scenario::Scenario;

pub fn format_response(
    record: &InputRecord,
    response_text: &str,
    scenario: Scenario,
) -> OutputRecord {
    let result = match scenario {
        Scenario::EntityRecognition => Value::from(parse_entities(response_text)),
        Scenario::Summarization | Scenario::ImageCaptioning | Scenario::ImageDescription => {
            Value::from(response_text)
        }
    };

    let output = OutputRecord::success(record.record_id.clone(), json!({ "result": result }));
    log::debug!("Formatted response for record {}", output.record_id);
    output
}

/// Parse a `[a, b, c]` reply into its entries. This is a textual convention:
/// replies in any other shape come back as whatever the comma split yields.
pub fn parse_entities(response_text: &str) -> Vec<String> {
    response_text
        .trim_matches(|c: char| c == '[' || c == ']')
        .split(',')
        .map(|entity| entity.trim().to_string())
        .collect()
}
