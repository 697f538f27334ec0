//! Server-rendered page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `GET /` renders the whole office page from a visitor's session: the
//! static blurb, the locale selector, the advice button, the composer, the
//! sorted message list, and at most one pending notice as a modal. Every
//! control is a plain form that posts back and redirects here.

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use leptos::prelude::*;

use crate::components::blurb::Blurb;
use crate::components::message_board::BoardSection;
use crate::components::notice_modal::NoticeModal;
use crate::components::office_header::OfficeHeader;
use crate::locale::Locale;
use crate::notice::Notice;
use crate::state::AppState;
use crate::store::Message;

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;

const STYLE: &str = "body{margin:0;min-height:100vh;background:linear-gradient(#c084fc,#ec4899);\
font-family:system-ui,sans-serif;padding:2rem}\
.card{max-width:48rem;margin:0 auto;background:#fff;border-radius:.75rem;padding:1.5rem}\
h1,h2,h3{text-align:center;color:#6b21a8;margin:.25rem 0}h2{font-size:2.5rem}\
.badge{display:block;width:max-content;margin:.5rem auto;border:1px solid #ccc;border-radius:999px;padding:0 .6rem}\
.quote,.center{text-align:center}.quote{font-style:italic}.fine{font-size:.75rem;color:#6b7280;text-align:center}\
.grid{display:grid;grid-template-columns:1fr 1fr;gap:1rem;margin:1rem 0}\
.lang{text-align:right}.composer{display:flex;gap:.5rem}.composer textarea{flex-grow:1}\
.msg{display:flex;justify-content:space-between;align-items:center;border:1px solid #e5e7eb;\
border-radius:.5rem;padding:.5rem 1rem;margin:.5rem 0}.votes{display:flex;gap:.5rem}\
.modal{position:fixed;inset:0;background:rgba(0,0,0,.4);display:flex;align-items:center;justify-content:center}\
.modal .card{min-width:20rem;text-align:center}.modal .icon-error{color:#dc2626}.modal .icon-info{color:#2563eb}";

/// Everything one render needs, taken from a session.
#[derive(Debug, Clone)]
pub struct PageView {
    pub locale: Locale,
    pub draft: String,
    /// Messages in display order.
    pub messages: Vec<Message>,
    pub notice: Option<Notice>,
}

/// `GET /`: render the page for this visitor.
///
/// Every render folds in a fresh first page, so a reload shows messages and
/// votes from other visitors. A failed refresh still renders what is held.
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, session) = super::session_for(&state, jar).await;

    if let Err(e) = state.board.refresh(&session.board).await {
        session.push_notice(e.notice()).await;
    }

    let (draft, messages): (String, Vec<Message>) = {
        let board = session.board.lock().await;
        (board.draft().to_owned(), board.sorted().into_iter().cloned().collect())
    };
    let view = PageView { locale: session.locale().await, draft, messages, notice: session.take_notice().await };

    (jar, Html(render(view)))
}

/// Render a full HTML document for `view`.
#[must_use]
pub fn render(view: PageView) -> String {
    let PageView { locale, draft, messages, notice } = view;
    let body = Owner::new().with(|| {
        view! {
            <html lang={locale.code()}>
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <title>"International Students Office"</title>
                    <style>{STYLE}</style>
                </head>
                <body>
                    <main class="card">
                        <OfficeHeader active=locale/>
                        <Blurb/>
                        <BoardSection draft=draft messages=messages/>
                        <p class="fine">"Office Hours: Whenever we're awake and not in class (so basically never)"</p>
                    </main>
                    {notice.map(|notice| view! { <NoticeModal notice=notice/> })}
                </body>
            </html>
        }
        .to_html()
    });
    format!("<!DOCTYPE html>{body}")
}
