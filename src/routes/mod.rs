//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One page at `/`, plain form actions that mutate the visitor's board and
//! redirect back, a JSON view of the board, and a health check. The visitor
//! is identified by the `board_session` cookie.

pub mod actions;
pub mod api;
pub mod page;

use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::session::Session;
use crate::state::AppState;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

pub(crate) const SESSION_COOKIE: &str = "board_session";

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/locale", post(actions::select_locale))
        .route("/advice", post(actions::advice))
        .route("/messages", post(actions::submit))
        .route("/messages/more", post(actions::load_more))
        .route("/messages/{id}/like", post(actions::like))
        .route("/messages/{id}/dislike", post(actions::dislike))
        .route("/api/messages", get(api::messages))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolve the visitor's session from the cookie jar, issuing a cookie for
/// new sessions.
pub(crate) async fn session_for(state: &AppState, jar: CookieJar) -> (CookieJar, Arc<Session>) {
    let presented = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

    let (id, session, created) = state.sessions.resolve(presented).await;
    if !created {
        return (jar, session);
    }

    let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.cookie_secure);
    (jar.add(cookie), session)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
