//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component renders one region of the office page from plain values
//! taken out of a visitor's session. Controls are ordinary forms that post
//! back to the server, so nothing here needs client-side reactivity.

pub mod blurb;
pub mod message_board;
pub mod notice_modal;
pub mod office_header;
