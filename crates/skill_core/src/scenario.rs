//! Scenario - the fixed set of tasks the skill can perform.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SkillError;

/// A supported task. Selects the system prompt and the reply shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    Summarization,
    EntityRecognition,
    ImageCaptioning,
    ImageDescription,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Summarization,
        Scenario::EntityRecognition,
        Scenario::ImageCaptioning,
        Scenario::ImageDescription,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Summarization => "summarization",
            Scenario::EntityRecognition => "entity-recognition",
            Scenario::ImageCaptioning => "image-captioning",
            Scenario::ImageDescription => "image-description",
        }
    }

    /// Whether the record payload is an image rather than text
    pub fn is_image(&self) -> bool {
        match self {
            Scenario::Summarization | Scenario::EntityRecognition => false,
            Scenario::ImageCaptioning | Scenario::ImageDescription => true,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = SkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == s)
            .ok_or_else(|| SkillError::UnknownScenario(s.to_string()))
    }
}
