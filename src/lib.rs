//! Third-floor international student office: a joke landing page with a
//! small voting message board.
//!
//! ARCHITECTURE
//! ============
//! `store` owns persistence behind the `MessageStore` trait, `board` keeps
//! each visitor's accumulated message list, `session` maps cookies to those
//! boards, `components` lays out the page as Leptos views, and `routes`
//! serves that page and handles its forms.

pub mod advice;
pub mod board;
pub mod components;
pub mod config;
pub mod db;
pub mod locale;
pub mod notice;
pub mod routes;
pub mod session;
pub mod state;
pub mod store;
