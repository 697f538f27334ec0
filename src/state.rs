//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the board service (store + page size) and the registry of live
//! visitor sessions, each owning its own `MessageBoard`.

use std::sync::Arc;

use crate::board::service::BoardService;
use crate::session::SessionRegistry;
use crate::store::MessageStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-backed or Copy.
#[derive(Clone)]
pub struct AppState {
    pub board: BoardService,
    pub sessions: SessionRegistry,
    /// Mark the session cookie `Secure`.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn MessageStore>, page_size: usize, cookie_secure: bool) -> Self {
        Self { board: BoardService::new(store, page_size), sessions: SessionRegistry::new(), cookie_secure }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
