//! Game event logging
//!
//! Provides a compact text format for the events a match produces. The
//! EventBus decouples the simulation systems that emit events from the
//! system that writes them to the log.

mod bus;
mod format;
mod logger;
mod types;

pub use bus::{BusEvent, EventBus, advance_event_tick};
pub use format::serialize_event;
pub use logger::{Session, log_game_events, start_session};
pub use types::GameEvent;
