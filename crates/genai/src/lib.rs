//! Generation orchestration for conversational slide-deck creation.
//!
//! Wires the prompt builder, the external text provider, extraction, and
//! validation into a per-request pipeline with strict commit discipline,
//! and holds the per-session conversation state behind per-key locks.

pub mod config;
pub mod error;
pub mod provider;
pub mod service;
pub mod store;

pub use config::ProviderConfig;
pub use error::{Error, Result};
pub use provider::{GroqClient, TextProvider};
pub use service::{ChatService, GenerateReply};
pub use store::ConversationStore;
