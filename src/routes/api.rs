//! JSON view of a visitor's board.

use axum::extract::State;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use crate::state::AppState;
use crate::store::Message;

#[derive(Serialize)]
pub struct BoardResponse {
    /// Messages in display order.
    pub messages: Vec<Message>,
    /// Whether a cursor is held, i.e. "Load More" has somewhere to start.
    pub has_cursor: bool,
    pub draft: String,
}

/// `GET /api/messages`: the sorted view of this visitor's board.
pub async fn messages(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, session) = super::session_for(&state, jar).await;
    let board = session.board.lock().await;
    let body = BoardResponse {
        messages: board.sorted().into_iter().cloned().collect(),
        has_cursor: board.cursor().is_some(),
        draft: board.draft().to_owned(),
    };
    (jar, Json(body))
}
