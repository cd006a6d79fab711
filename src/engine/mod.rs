//! Engine controller and the coordinator protocol.
//!
//! This module wraps the search in a per-session [`Engine`] that owns the
//! search state, picks a time budget per move and turns every request line
//! into exactly one reply line.

mod controller;
mod protocol;
pub mod time;

pub use controller::{Engine, EngineError, EngineOptions, FAILURE_TOKEN};
pub use protocol::{CommandResult, MoveExchange, ProtocolError, QUIT_TOKEN, READY_TOKEN};
pub use time::TimeBudget;
