//! The generation orchestrator.
//!
//! Drives one request through prompt assembly, the provider call,
//! extraction, validation, and the commit to conversation state. Any
//! failure is terminal for the request. Commit discipline: exactly one
//! user append before the provider call and exactly one assistant append
//! after validation; a failed generation leaves only the user's attempt
//! in history.

use crate::error::{Error, Result};
use crate::provider::TextProvider;
use crate::store::ConversationStore;
use deck_core::{
    build_prompt, extract_presentation, ConversationContext, Message, Presentation,
    CONTEXT_WINDOW,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Successful generation response at the service boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReply {
    /// Conversational confirmation for the caller.
    pub message: String,
    /// The accepted presentation.
    pub presentation_data: Presentation,
    /// Identifier of the conversation the request committed to.
    pub conversation_id: String,
}

/// Conversation-driven presentation generation service.
pub struct ChatService {
    store: ConversationStore,
    provider: Arc<dyn TextProvider>,
    // One lock per session id; requests for the same session serialize,
    // unrelated sessions stay concurrent.
    session_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl ChatService {
    /// Create a service around a provider with an empty store.
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self {
            store: ConversationStore::new(),
            provider,
            session_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Generate (or regenerate) the presentation for a session from a new
    /// user message.
    pub async fn generate(&self, session_id: &str, message: &str) -> Result<GenerateReply> {
        if session_id.trim().is_empty() {
            return Err(Error::Input("sessionId is required".to_string()));
        }
        if message.trim().is_empty() {
            return Err(Error::Input(
                "message must be a non-empty string".to_string(),
            ));
        }

        let lock = self.session_lock(session_id).await;
        let _guard = lock.lock().await;

        let mut context = self.store.get_or_create(session_id).await;
        context.push(Message::user(message));
        // The user's attempt is recorded even when generation fails.
        self.store.save(context.clone()).await;

        let prompt = build_prompt(
            context.window(CONTEXT_WINDOW),
            context.current_presentation(),
            message,
        );

        log::info!("Calling text provider for session {session_id}");
        let raw = self.provider.generate_text(&prompt).await?;

        let presentation = match extract_presentation(&raw) {
            Ok(presentation) => presentation,
            Err(e) => {
                // Keep the raw text in diagnostics; never surface it.
                log::debug!("Provider output rejected ({e}); raw text: {raw}");
                return Err(e.into());
            }
        };

        log::info!(
            "Accepted presentation \"{}\" with {} slides",
            presentation.title,
            presentation.slide_count()
        );

        let reply_message = presentation.confirmation();
        context.push(Message::assistant(&reply_message, presentation.clone()));
        context.set_presentation(presentation.clone());
        self.store.save(context).await;

        Ok(GenerateReply {
            message: reply_message,
            presentation_data: presentation,
            conversation_id: session_id.to_string(),
        })
    }

    /// The full conversation context for a session.
    pub async fn conversation(&self, session_id: &str) -> Result<ConversationContext> {
        self.store
            .get(session_id)
            .await
            .ok_or_else(|| Error::NotFound(session_id.to_string()))
    }

    /// Delete a session's conversation.
    pub async fn delete(&self, session_id: &str) -> Result<()> {
        let removed = self.store.remove(session_id).await;

        // Prune the session's lock so the map does not grow with session
        // churn. A lock still held by an in-flight request stays put; its
        // entry is reused and pruned on a later delete.
        let mut locks = self.session_locks.lock().await;
        if locks
            .get(session_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(session_id);
        }
        drop(locks);

        if removed {
            Ok(())
        } else {
            Err(Error::NotFound(session_id.to_string()))
        }
    }

    async fn session_lock(&self, session_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.session_locks.lock().await;
        locks
            .entry(session_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    #[cfg(test)]
    async fn session_lock_count(&self) -> usize {
        self.session_locks.lock().await.len()
    }
}
