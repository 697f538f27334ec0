//! Client-side message list state.

use std::collections::HashSet;

use uuid::Uuid;

use crate::store::{Cursor, Message, Page};

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

/// Messages fetched so far, the pagination cursor, and the composer draft.
#[derive(Debug, Clone, Default)]
pub struct MessageBoard {
    /// Messages in first-seen order.
    messages: Vec<Message>,
    ids: HashSet<Uuid>,
    cursor: Option<Cursor>,
    draft: String,
}

impl MessageBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: Uuid) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Merge a fetched page. Messages already held are skipped, so applying
    /// the same page twice is a no-op. A non-empty page moves the cursor to
    /// its end; an empty page leaves it alone.
    ///
    /// Returns how many messages were new.
    pub fn merge_page(&mut self, page: Page) -> usize {
        let end = page.end;
        let was_empty = page.is_empty();

        let mut added = 0;
        for message in page.messages {
            if self.ids.insert(message.id) {
                self.messages.push(message);
                added += 1;
            }
        }

        if !was_empty {
            if let Some(end) = end {
                self.cursor = Some(end);
            }
        }
        added
    }

    /// Merge a re-fetched first page on reload. New messages are added and
    /// held ones take the page's counters. The cursor only moves when the
    /// board has none yet, so pages reached through "Load More" stay put.
    ///
    /// Returns how many messages were new.
    pub fn refresh_page(&mut self, page: Page) -> usize {
        let cursor = self.cursor;
        for message in &page.messages {
            self.apply_counts(message);
        }
        let added = self.merge_page(page);
        if cursor.is_some() {
            self.cursor = cursor;
        }
        added
    }

    /// Take the draft for submission. Blank drafts stay put and yield `None`.
    pub fn take_submission(&mut self) -> Option<String> {
        if self.draft.trim().is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.draft))
    }

    /// Put a draft back after a failed submission, unless the user has
    /// already typed something new.
    pub fn restore_draft(&mut self, text: String) {
        if self.draft.is_empty() {
            self.draft = text;
        }
    }

    /// Copy fresh counters onto the local copy of `updated`, if held.
    ///
    /// Returns whether a local message was touched.
    pub fn apply_counts(&mut self, updated: &Message) -> bool {
        let Some(local) = self.messages.iter_mut().find(|m| m.id == updated.id) else {
            return false;
        };
        local.likes = updated.likes;
        local.dislikes = updated.dislikes;
        true
    }

    /// Display order: most likes first, then fewest dislikes. Remaining ties
    /// keep first-seen order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Message> {
        let mut view: Vec<&Message> = self.messages.iter().collect();
        view.sort_by(|a, b| b.likes.cmp(&a.likes).then(a.dislikes.cmp(&b.dislikes)));
        view
    }
}
