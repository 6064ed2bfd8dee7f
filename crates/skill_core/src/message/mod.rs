//! Chat message types sent to the chat-completion API

pub mod content;

pub use content::{ChatMessage, Content, ContentPart, ImageUrl, Role};
