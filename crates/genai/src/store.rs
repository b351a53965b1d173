//! In-memory conversation store.
//!
//! Stands in for the external persistence collaborator: session lookup
//! never fails (absence is a valid state), retention/TTL enforcement
//! lives outside the core.

use deck_core::ConversationContext;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Session id → conversation context map.
#[derive(Debug, Default)]
pub struct ConversationStore {
    inner: RwLock<HashMap<String, ConversationContext>>,
}

impl ConversationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The existing context for a session, or a freshly initialized empty
    /// one. Never fails.
    pub async fn get_or_create(&self, session_id: &str) -> ConversationContext {
        let guard = self.inner.read().await;
        match guard.get(session_id) {
            Some(context) => context.clone(),
            None => ConversationContext::new(session_id),
        }
    }

    /// The existing context for a session, if any.
    pub async fn get(&self, session_id: &str) -> Option<ConversationContext> {
        self.inner.read().await.get(session_id).cloned()
    }

    /// Persist a context snapshot, replacing any previous one.
    pub async fn save(&self, context: ConversationContext) {
        let mut guard = self.inner.write().await;
        guard.insert(context.session_id.clone(), context);
    }

    /// Remove a session. Returns whether it existed.
    pub async fn remove(&self, session_id: &str) -> bool {
        self.inner.write().await.remove(session_id).is_some()
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::Message;

    #[tokio::test]
    async fn test_get_or_create_returns_fresh_context_for_unknown_session() {
        let store = ConversationStore::new();
        let context = store.get_or_create("s1").await;
        assert_eq!(context.session_id, "s1");
        assert!(context.is_empty());
        // Not persisted until saved.
        assert!(store.get("s1").await.is_none());
    }

    #[tokio::test]
    async fn test_save_then_get_round_trips() {
        let store = ConversationStore::new();
        let mut context = store.get_or_create("s1").await;
        context.push(Message::user("hello"));
        store.save(context).await;

        let loaded = store.get("s1").await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.messages()[0].content, "hello");
    }

    #[tokio::test]
    async fn test_remove_reports_existence() {
        let store = ConversationStore::new();
        store.save(ConversationContext::new("s1")).await;
        assert!(store.remove("s1").await);
        assert!(!store.remove("s1").await);
        assert!(store.is_empty().await);
    }
}
