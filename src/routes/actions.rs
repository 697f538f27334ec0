//! Form actions. Each one mutates the visitor's session and answers with a
//! `303 See Other` back to `/`, where any resulting notice is shown.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use uuid::Uuid;

use crate::advice;
use crate::board::service::Vote;
use crate::locale::{self, Locale};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LocaleForm {
    pub language: Locale,
}

#[derive(Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub text: String,
}

fn back_to_page(jar: CookieJar) -> impl IntoResponse {
    (jar, Redirect::to("/"))
}

/// `POST /locale`: change the display language (or try to).
pub async fn select_locale(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LocaleForm>,
) -> impl IntoResponse {
    let (jar, session) = super::session_for(&state, jar).await;

    let selection = locale::select(form.language);
    session.set_locale(selection.active).await;
    if let Some(notice) = selection.notice {
        session.push_notice(notice).await;
    }
    back_to_page(jar)
}

/// `POST /advice`: show a random tip.
pub async fn advice(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, session) = super::session_for(&state, jar).await;
    let tip = advice::random_tip(&mut rand::rng());
    session.push_notice(advice::advice_notice(tip)).await;
    back_to_page(jar)
}

/// `POST /messages`: post the composer text.
pub async fn submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SubmitForm>,
) -> impl IntoResponse {
    let (jar, session) = super::session_for(&state, jar).await;

    session.board.lock().await.set_draft(form.text);
    if let Err(e) = state.board.submit(&session.board).await {
        session.push_notice(e.notice()).await;
    }
    back_to_page(jar)
}

/// `POST /messages/more`: fetch the next page.
pub async fn load_more(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, session) = super::session_for(&state, jar).await;
    if let Err(e) = state.board.load_more(&session.board).await {
        session.push_notice(e.notice()).await;
    }
    back_to_page(jar)
}

/// `POST /messages/:id/like`
pub async fn like(State(state): State<AppState>, jar: CookieJar, Path(id): Path<Uuid>) -> impl IntoResponse {
    cast_vote(state, jar, id, Vote::Like).await
}

/// `POST /messages/:id/dislike`
pub async fn dislike(State(state): State<AppState>, jar: CookieJar, Path(id): Path<Uuid>) -> impl IntoResponse {
    cast_vote(state, jar, id, Vote::Dislike).await
}

async fn cast_vote(state: AppState, jar: CookieJar, id: Uuid, vote: Vote) -> impl IntoResponse {
    let (jar, session) = super::session_for(&state, jar).await;
    if let Err(e) = state.board.vote(&session.board, id, vote).await {
        session.push_notice(e.notice()).await;
    }
    back_to_page(jar)
}
