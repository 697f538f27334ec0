//! Board operations: fetch, load more, submit, vote.
//!
//! DESIGN
//! ======
//! Each operation awaits its store calls without holding the board lock and
//! only locks to apply a pure `MessageBoard` transition afterwards. Two
//! overlapping fetches therefore both land, in completion order; the id-dedup
//! merge keeps the message set consistent either way.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps to one `BoardError` kind, is logged once here, and is
//! shown to the viewer as a generic notice. Nothing is retried. A failed fetch
//! never partially merges.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use super::state::MessageBoard;
use crate::notice::Notice;
use crate::store::{Counter, Cursor, Message, MessageStore, NewMessage, Page, PageQuery, StoreError};

#[cfg(test)]
#[path = "service_test.rs"]
mod tests;

pub const DEFAULT_PAGE_SIZE: usize = 5;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("failed to load messages: {0}")]
    Fetch(#[source] StoreError),
    #[error("failed to send message: {0}")]
    Send(#[source] StoreError),
    #[error("failed to like message: {0}")]
    Like(#[source] StoreError),
    #[error("failed to dislike message: {0}")]
    Dislike(#[source] StoreError),
}

impl BoardError {
    fn vote(vote: Vote, err: StoreError) -> Self {
        match vote {
            Vote::Like => Self::Like(err),
            Vote::Dislike => Self::Dislike(err),
        }
    }

    /// Generic popup shown to the viewer. Store details stay in the logs.
    #[must_use]
    pub fn notice(&self) -> Notice {
        let text = match self {
            Self::Fetch(_) => "Failed to load messages.",
            Self::Send(_) => "Failed to send message.",
            Self::Like(_) => "Failed to like message.",
            Self::Dislike(_) => "Failed to dislike message.",
        };
        Notice::error("Error", text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Like,
    Dislike,
}

impl Vote {
    #[must_use]
    pub fn counter(self) -> Counter {
        match self {
            Self::Like => Counter::Likes,
            Self::Dislike => Counter::Dislikes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank draft; nothing was sent.
    Dropped,
    Posted(Uuid),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
    Counted(Message),
    /// The message no longer exists in the store.
    Missing,
}

// =============================================================================
// SERVICE
// =============================================================================

/// Board operations bound to a store and a page size.
#[derive(Clone)]
pub struct BoardService {
    store: Arc<dyn MessageStore>,
    page_size: usize,
}

impl BoardService {
    #[must_use]
    pub fn new(store: Arc<dyn MessageStore>, page_size: usize) -> Self {
        Self { store, page_size: page_size.max(1) }
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Fetch one newest-first page after `cursor` and merge it.
    ///
    /// Returns the number of newly merged messages.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Fetch` if the query fails; the board is untouched.
    pub async fn fetch_page(&self, board: &Mutex<MessageBoard>, cursor: Option<Cursor>) -> Result<usize, BoardError> {
        let page = self.query(cursor).await?;
        if page.is_empty() {
            debug!("no more messages to load");
        }
        let added = board.lock().await.merge_page(page);
        Ok(added)
    }

    /// Page reload: fetch the first page again and fold it in without
    /// losing the "Load More" position.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Fetch` if the query fails; the board is untouched.
    pub async fn refresh(&self, board: &Mutex<MessageBoard>) -> Result<usize, BoardError> {
        let page = self.query(None).await?;
        let added = board.lock().await.refresh_page(page);
        if added > 0 {
            debug!(added, "reload picked up new messages");
        }
        Ok(added)
    }

    async fn query(&self, cursor: Option<Cursor>) -> Result<Page, BoardError> {
        self.store
            .query_page(PageQuery::newest(cursor, self.page_size))
            .await
            .map_err(|e| {
                warn!(error = %e, "error fetching messages");
                BoardError::Fetch(e)
            })
    }

    /// "Load More": fetch the page after the board's current cursor.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Fetch` if the query fails.
    pub async fn load_more(&self, board: &Mutex<MessageBoard>) -> Result<usize, BoardError> {
        let cursor = board.lock().await.cursor();
        self.fetch_page(board, cursor).await
    }

    /// Post the board's draft, then refetch the first page.
    ///
    /// Blank drafts are dropped without touching the store.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Send` if the insert fails (the draft is put back)
    /// or `BoardError::Fetch` if the follow-up fetch fails.
    pub async fn submit(&self, board: &Mutex<MessageBoard>) -> Result<Submission, BoardError> {
        let Some(text) = board.lock().await.take_submission() else {
            return Ok(Submission::Dropped);
        };

        let id = match self.store.create(NewMessage::now(text.clone())).await {
            Ok(id) => id,
            Err(e) => {
                warn!(error = %e, "error sending message");
                board.lock().await.restore_draft(text);
                return Err(BoardError::Send(e));
            }
        };
        debug!(%id, "message posted");

        self.fetch_page(board, None).await?;
        Ok(Submission::Posted(id))
    }

    /// Add one like or dislike to `id`, then refetch the first page.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Like`/`BoardError::Dislike` if the write fails, or
    /// `BoardError::Fetch` if the follow-up fetch fails.
    pub async fn vote(&self, board: &Mutex<MessageBoard>, id: Uuid, vote: Vote) -> Result<VoteOutcome, BoardError> {
        let updated = self
            .store
            .increment(id, vote.counter())
            .await
            .map_err(|e| {
                warn!(error = %e, %id, ?vote, "error voting on message");
                BoardError::vote(vote, e)
            })?;

        let Some(updated) = updated else {
            debug!(%id, "vote target no longer exists");
            return Ok(VoteOutcome::Missing);
        };

        board.lock().await.apply_counts(&updated);
        self.fetch_page(board, None).await?;
        Ok(VoteOutcome::Counted(updated))
    }
}
