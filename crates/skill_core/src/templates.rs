//! Scenario → system prompt mapping, loaded once at startup.

use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::scenario::Scenario;

const SUMMARIZATION_PROMPT: &str = "You are a useful AI assistant who is an expert at succinctly summarizing long form text into a simple summary. Summarize the text given to you in about 200 words or less.";
const ENTITY_RECOGNITION_PROMPT: &str = "You are an AI assistant that helps people find information. Help me recognize any unique entities like people, places, email address, job titles, etc. in this paragraph. You will return your response in this format: [list of entities]";
const IMAGE_CAPTIONING_PROMPT: &str = "You are a useful AI assistant who can provide captions for images. You will be provided an image as a base64 encoded string.";
const IMAGE_DESCRIPTION_PROMPT: &str = "You are a useful AI assistant who can describe images. You will be provided an image as a base64 encoded string. Describe the image in details in Markdown format. Preserve numeric information. Do not add your own information or assumption.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptTemplates {
    prompts: HashMap<Scenario, String>,
}

impl PromptTemplates {
    /// The prompts the service ships with
    pub fn builtin() -> Self {
        Self::from_iter([
            (Scenario::Summarization, SUMMARIZATION_PROMPT),
            (Scenario::EntityRecognition, ENTITY_RECOGNITION_PROMPT),
            (Scenario::ImageCaptioning, IMAGE_CAPTIONING_PROMPT),
            (Scenario::ImageDescription, IMAGE_DESCRIPTION_PROMPT),
        ])
    }

    /// Load prompts from a JSON object of `{"<scenario>": "<prompt>"}`.
    ///
    /// A missing file falls back to [`PromptTemplates::builtin`]. An unreadable or
    /// malformed file is an error. Keys that name no known scenario are skipped.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!(
                "No prompt file at {}, using built-in prompts",
                path.display()
            );
            return Ok(Self::builtin());
        }

        let content = std::fs::read_to_string(path)?;
        let templates = Self::from_json(&content)?;
        log::info!(
            "Loaded {} prompt templates from {}",
            templates.len(),
            path.display()
        );
        Ok(templates)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_str(content)?;
        let mut prompts = HashMap::with_capacity(raw.len());
        for (name, prompt) in raw {
            match name.parse::<Scenario>() {
                Ok(scenario) => {
                    prompts.insert(scenario, prompt);
                }
                Err(_) => log::warn!("Ignoring prompt for unsupported scenario '{}'", name),
            }
        }
        Ok(Self { prompts })
    }

    /// Prompt text for `scenario`. Empty prompts count as absent.
    pub fn get(&self, scenario: Scenario) -> Option<&str> {
        self.prompts
            .get(&scenario)
            .map(String::as_str)
            .filter(|prompt| !prompt.is_empty())
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(Scenario, S)> for PromptTemplates {
    fn from_iter<I: IntoIterator<Item = (Scenario, S)>>(iter: I) -> Self {
        Self {
            prompts: iter
                .into_iter()
                .map(|(scenario, prompt)| (scenario, prompt.into()))
                .collect(),
        }
    }
}
