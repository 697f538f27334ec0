//! Message store: the collaborator that owns persistence and ordering.
//!
//! DESIGN
//! ======
//! The board never talks to a database directly. Everything goes through the
//! `MessageStore` trait: create, ordered page queries, single reads, partial
//! field updates, and counter increments. Two implementations ship with the
//! binary: `memory::MemoryStore` and `postgres::PgMessageStore`.
//!
//! TRADE-OFFS
//! ==========
//! The baseline `increment` is a plain read followed by a write and can lose
//! updates when two writers race on the same message. Both bundled stores
//! override it with an atomic increment.

pub mod memory;
pub mod postgres;

use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("message not found: {0}")]
    NotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A stored message, as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub likes: u64,
    pub dislikes: u64,
}

/// Fields supplied when creating a message. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub text: String,
    pub created_at: OffsetDateTime,
    pub likes: u64,
    pub dislikes: u64,
}

impl NewMessage {
    /// A fresh message with zeroed counters, stamped with the current time.
    #[must_use]
    pub fn now(text: impl Into<String>) -> Self {
        Self { text: text.into(), created_at: OffsetDateTime::now_utc(), likes: 0, dislikes: 0 }
    }
}

/// Partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessagePatch {
    pub likes: Option<u64>,
    pub dislikes: Option<u64>,
}

impl MessagePatch {
    pub fn apply(self, message: &mut Message) {
        if let Some(likes) = self.likes {
            message.likes = likes;
        }
        if let Some(dislikes) = self.dislikes {
            message.dislikes = dislikes;
        }
    }
}

/// One of the two vote counters on a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    Likes,
    Dislikes,
}

impl Counter {
    #[must_use]
    pub fn value(self, message: &Message) -> u64 {
        match self {
            Self::Likes => message.likes,
            Self::Dislikes => message.dislikes,
        }
    }

    /// Patch that sets this counter to `value`.
    #[must_use]
    pub fn patch(self, value: u64) -> MessagePatch {
        match self {
            Self::Likes => MessagePatch { likes: Some(value), dislikes: None },
            Self::Dislikes => MessagePatch { likes: None, dislikes: Some(value) },
        }
    }
}

/// Ordering direction on `created_at`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    #[default]
    Descending,
}

/// Opaque position marker: the last document of a page.
///
/// Ties on `created_at` are broken by id so every position is unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    created_at: OffsetDateTime,
    id: Uuid,
}

impl Cursor {
    #[must_use]
    pub fn after(message: &Message) -> Self {
        Self { created_at: message.created_at, id: message.id }
    }

    pub(crate) fn key(self) -> (OffsetDateTime, Uuid) {
        (self.created_at, self.id)
    }
}

/// Parameters of an ordered page query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub direction: Direction,
    pub after: Option<Cursor>,
    pub limit: usize,
}

impl PageQuery {
    /// Newest-first page of `limit` messages, starting strictly after `after`.
    #[must_use]
    pub fn newest(after: Option<Cursor>, limit: usize) -> Self {
        Self { direction: Direction::Descending, after, limit }
    }
}

/// An ordered page plus the cursor of its last document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub messages: Vec<Message>,
    pub end: Option<Cursor>,
}

impl Page {
    #[must_use]
    pub fn new(messages: Vec<Message>) -> Self {
        let end = messages.last().map(Cursor::after);
        Self { messages, end }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

// =============================================================================
// TRAIT
// =============================================================================

/// Query/mutation interface over the `messages` collection.
#[async_trait::async_trait]
pub trait MessageStore: Send + Sync {
    /// Insert a message and return its store-assigned id.
    async fn create(&self, message: NewMessage) -> Result<Uuid, StoreError>;

    /// Fetch one ordered page.
    async fn query_page(&self, query: PageQuery) -> Result<Page, StoreError>;

    /// Read a message's current fields. `Ok(None)` when it does not exist.
    async fn read_one(&self, id: Uuid) -> Result<Option<Message>, StoreError>;

    /// Apply the given field values. No concurrency check.
    async fn update_fields(&self, id: Uuid, patch: MessagePatch) -> Result<(), StoreError>;

    /// Add one to `counter` and return the updated message.
    ///
    /// The default reads the current value and writes back value + 1, which
    /// is not atomic. Stores with an atomic increment should override it.
    async fn increment(&self, id: Uuid, counter: Counter) -> Result<Option<Message>, StoreError> {
        let Some(mut message) = self.read_one(id).await? else {
            return Ok(None);
        };
        let patch = counter.patch(counter.value(&message).saturating_add(1));
        self.update_fields(id, patch).await?;
        patch.apply(&mut message);
        Ok(Some(message))
    }
}
