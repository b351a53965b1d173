//! Core domain types, schema validation, JSON extraction, conversation
//! context, and prompt assembly for AI slide-deck generation.

pub mod context;
pub mod error;
pub mod extract;
pub mod prompt;
pub mod types;
pub mod validate;

pub use context::ConversationContext;
pub use error::{Error, Result};
pub use extract::extract_presentation;
pub use prompt::build_prompt;
pub use types::{Message, Presentation, Role, Slide, SlideLayout, CONTEXT_WINDOW};
pub use validate::validate;
