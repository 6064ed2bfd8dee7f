//! skill_core - Core types for the custom skill service
//!
//! This crate provides the request/response types and the two pure stages of
//! the skill pipeline:
//! - `scenario` - the closed set of supported tasks
//! - `templates` - scenario → system prompt mapping
//! - `record` - batch input/output records
//! - `message` - chat message types sent to the model
//! - `prompt` - builds chat messages for a record
//! - `format` - shapes a model reply into an output record

pub mod error;
pub mod format;
pub mod message;
pub mod prompt;
pub mod record;
pub mod scenario;
pub mod templates;

pub use error::{Result, SkillError};
pub use format::format_response;
pub use message::{ChatMessage, Content, ContentPart, ImageUrl, Role};
pub use prompt::build_messages;
pub use record::{InputRecord, OutputRecord, SkillRequest, SkillResponse};
pub use scenario::Scenario;
pub use templates::PromptTemplates;
