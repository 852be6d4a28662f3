//! Pong - a two-player table tennis game built with Bevy
//!
//! This crate provides all game components, resources, and systems organized into modules.

// Core modules
pub mod constants;
pub mod events;
pub mod simulation;
pub mod tuning;

// Game logic modules
pub mod ball;
pub mod input;
pub mod player;
pub mod scoring;
pub mod ui;
pub mod world;

// Re-export commonly used types for convenience
pub use ball::{Ball, Collider, Heading, HitZone};
pub use constants::*;
pub use events::{BusEvent, EventBus, GameEvent, Session, serialize_event};
pub use input::PlayerInput;
pub use player::{Paddle, PlayerId};
pub use scoring::{MatchState, Referee, ScoreUi, Scoreboard};
pub use simulation::{HeadlessAppBuilder, MatchEntities};
pub use tuning::{PongTuning, ScreenBounds};
pub use ui::{MatchBanner, ScoreFont, ScoreText};
