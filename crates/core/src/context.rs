//! Per-session conversation state.
//!
//! A [`ConversationContext`] holds the append-only message history and the
//! latest accepted presentation for one session. History entries are never
//! edited or removed; the presentation is replaced wholesale on each
//! accepted generation, because the generative step reconstructs the
//! entire object rather than patching it.

use crate::types::{Message, Presentation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordered conversation history plus the latest accepted presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationContext {
    /// Caller-chosen identifier scoping this conversation.
    pub session_id: String,

    messages: Vec<Message>,

    #[serde(skip_serializing_if = "Option::is_none")]
    current_presentation: Option<Presentation>,

    created_at: DateTime<Utc>,

    updated_at: DateTime<Utc>,
}

impl ConversationContext {
    /// A fresh, empty context for a session: no messages, no presentation.
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            messages: Vec::new(),
            current_presentation: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a message. Earlier entries are never mutated.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.updated_at = Utc::now();
    }

    /// All messages in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The last `n` messages, most-recent-last. Returns everything when
    /// fewer than `n` exist.
    pub fn window(&self, n: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }

    /// The latest accepted presentation, if any.
    pub fn current_presentation(&self) -> Option<&Presentation> {
        self.current_presentation.as_ref()
    }

    /// Replace the current presentation wholesale.
    pub fn set_presentation(&mut self, presentation: Presentation) {
        self.current_presentation = Some(presentation);
        self.updated_at = Utc::now();
    }

    /// When the context was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the context was last appended to or updated.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn context_with_messages(n: usize) -> ConversationContext {
        let mut context = ConversationContext::new("s1");
        for i in 0..n {
            context.push(Message::user(format!("message {i}")));
        }
        context
    }

    #[test]
    fn test_new_context_is_empty() {
        let context = ConversationContext::new("s1");
        assert!(context.is_empty());
        assert!(context.current_presentation().is_none());
    }

    #[test]
    fn test_window_returns_last_n_most_recent_last() {
        let context = context_with_messages(8);
        let window = context.window(5);
        assert_eq!(window.len(), 5);
        assert_eq!(window[0].content, "message 3");
        assert_eq!(window[4].content, "message 7");
    }

    #[test]
    fn test_window_returns_all_when_fewer_than_n() {
        let context = context_with_messages(2);
        assert_eq!(context.window(5).len(), 2);
    }

    #[test]
    fn test_push_preserves_append_order() {
        let mut context = ConversationContext::new("s1");
        context.push(Message::user("first"));
        context.push(Message::assistant(
            "second",
            Presentation {
                title: "T".to_string(),
                slides: vec![],
                response_message: None,
            },
        ));
        assert_eq!(context.messages()[0].role, Role::User);
        assert_eq!(context.messages()[1].role, Role::Assistant);
        assert_eq!(context.messages()[1].content, "second");
    }

    #[test]
    fn test_set_presentation_replaces_wholesale() {
        let mut context = ConversationContext::new("s1");
        let first = Presentation {
            title: "First".to_string(),
            slides: vec![],
            response_message: None,
        };
        let second = Presentation {
            title: "Second".to_string(),
            slides: vec![],
            response_message: None,
        };
        context.set_presentation(first);
        context.set_presentation(second);
        assert_eq!(context.current_presentation().unwrap().title, "Second");
    }
}
