//! Message board: per-viewer list state and the operations that drive it.
//!
//! DESIGN
//! ======
//! `state::MessageBoard` holds everything a viewer has accumulated (messages,
//! pagination cursor, draft) and only changes through pure transitions.
//! `service` performs the store calls and then applies those transitions, so
//! no lock is held while a store request is in flight.

pub mod service;
pub mod state;

pub use service::BoardError;
pub use state::MessageBoard;
