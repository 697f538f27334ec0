//! In-memory message store.
//!
//! Used when no `DATABASE_URL` is configured and as the backing store in
//! tests. Messages live in a `HashMap` behind a tokio `RwLock`; page queries
//! sort a snapshot on every call, which is fine for a single-page board.

use std::cmp::Reverse;
use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Counter, Direction, Message, MessagePatch, MessageStore, NewMessage, Page, PageQuery, StoreError};

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;

#[derive(Default)]
pub struct MemoryStore {
    messages: RwLock<HashMap<Uuid, Message>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored messages.
    pub async fn count(&self) -> usize {
        self.messages.read().await.len()
    }
}

#[async_trait::async_trait]
impl MessageStore for MemoryStore {
    async fn create(&self, message: NewMessage) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let stored = Message {
            id,
            text: message.text,
            created_at: message.created_at,
            likes: message.likes,
            dislikes: message.dislikes,
        };
        self.messages.write().await.insert(id, stored);
        Ok(id)
    }

    async fn query_page(&self, query: PageQuery) -> Result<Page, StoreError> {
        let messages = self.messages.read().await;
        let mut ordered: Vec<&Message> = messages.values().collect();
        match query.direction {
            Direction::Ascending => ordered.sort_by_key(|m| (m.created_at, m.id)),
            Direction::Descending => ordered.sort_by_key(|m| Reverse((m.created_at, m.id))),
        }

        let page = ordered
            .into_iter()
            .filter(|m| match (query.after, query.direction) {
                (None, _) => true,
                (Some(cursor), Direction::Ascending) => (m.created_at, m.id) > cursor.key(),
                (Some(cursor), Direction::Descending) => (m.created_at, m.id) < cursor.key(),
            })
            .take(query.limit)
            .cloned()
            .collect();

        Ok(Page::new(page))
    }

    async fn read_one(&self, id: Uuid) -> Result<Option<Message>, StoreError> {
        Ok(self.messages.read().await.get(&id).cloned())
    }

    async fn update_fields(&self, id: Uuid, patch: MessagePatch) -> Result<(), StoreError> {
        let mut messages = self.messages.write().await;
        let message = messages.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        patch.apply(message);
        Ok(())
    }

    async fn increment(&self, id: Uuid, counter: Counter) -> Result<Option<Message>, StoreError> {
        let mut messages = self.messages.write().await;
        let Some(message) = messages.get_mut(&id) else {
            return Ok(None);
        };
        match counter {
            Counter::Likes => message.likes = message.likes.saturating_add(1),
            Counter::Dislikes => message.dislikes = message.dislikes.saturating_add(1),
        }
        Ok(Some(message.clone()))
    }
}
