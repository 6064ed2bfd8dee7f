//! Batch records exchanged with the caller.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound batch body: `{"values": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillRequest {
    #[serde(default)]
    pub values: Vec<InputRecord>,
}

/// One unit of work. `recordId` is opaque and echoed back unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputRecord {
    #[serde(rename = "recordId", default)]
    pub record_id: Value,
    #[serde(default)]
    pub data: Value,
}

impl InputRecord {
    pub fn new(record_id: impl Into<Value>, data: Value) -> Self {
        Self {
            record_id: record_id.into(),
            data,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.data.get("text").and_then(Value::as_str)
    }

    /// Returns `(contentType, data)` of the image payload. Absent fields are empty.
    pub fn image(&self) -> (&str, &str) {
        let image = self.data.get("image");
        (
            image_field(image, "contentType"),
            image_field(image, "data"),
        )
    }
}

fn image_field<'a>(image: Option<&'a Value>, name: &str) -> &'a str {
    image
        .and_then(|image| image.get(name))
        .and_then(Value::as_str)
        .unwrap_or_default()
}

/// One unit of result. Exactly one per [`InputRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    pub record_id: Value,
    pub warnings: Option<Vec<String>>,
    pub errors: Vec<String>,
    pub data: Option<Value>,
}

impl OutputRecord {
    pub fn success(record_id: Value, data: Value) -> Self {
        Self {
            record_id,
            warnings: None,
            errors: Vec::new(),
            data: Some(data),
        }
    }

    pub fn failure(record_id: Value, error: impl Into<String>) -> Self {
        Self {
            record_id,
            warnings: None,
            errors: vec![error.into()],
            data: None,
        }
    }

    pub fn is_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillResponse {
    pub values: Vec<OutputRecord>,
}
