use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillError {
    #[error("System prompt not found for {0}")]
    UnknownScenario(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Failed to read prompt templates: {0}")]
    TemplateIo(#[from] std::io::Error),

    #[error("Failed to parse prompt templates: {0}")]
    TemplateParse(#[from] serde_json::Error),
}

pub type Result<T, E = SkillError> = std::result::Result<T, E>;
