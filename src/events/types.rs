//! Event type definitions for the logging system

use serde::{Deserialize, Serialize};

use crate::ball::HitZone;
use crate::player::PlayerId;
use crate::tuning::PongTuning;

/// All game events that can be logged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    // === Session Events ===
    /// Session started (generated once per game launch)
    SessionStart {
        session_id: String, // UUID v4
        timestamp: String,  // RFC 3339
    },
    /// Rules the session runs with (logged after session start)
    Config(PongTuning),

    // === Match Events ===
    /// Match started (1 for the first match, +1 per rematch)
    MatchStart { match_number: u32 },
    /// Match ended
    MatchEnd {
        winner: PlayerId,
        score_one: u32,
        score_two: u32,
        ticks: u64,
    },

    // === Scoring Events ===
    /// Point scored
    Goal {
        player: PlayerId,
        score_one: u32,
        score_two: u32,
    },

    // === Ball Events ===
    /// Ball deflected by a paddle
    PaddleHit { player: PlayerId, zone: HitZone },
    /// Ball bounced off the top or bottom wall
    WallBounce { y: i32 },
}

impl GameEvent {
    /// Get the event type code for compact serialization
    pub fn type_code(&self) -> &'static str {
        match self {
            GameEvent::SessionStart { .. } => "SE",
            GameEvent::Config(_) => "CF",
            GameEvent::MatchStart { .. } => "MS",
            GameEvent::MatchEnd { .. } => "ME",
            GameEvent::Goal { .. } => "G",
            GameEvent::PaddleHit { .. } => "PH",
            GameEvent::WallBounce { .. } => "WB",
        }
    }

    /// High-frequency ball events are only interesting when debugging
    pub fn is_verbose(&self) -> bool {
        matches!(self, GameEvent::PaddleHit { .. } | GameEvent::WallBounce { .. })
    }
}
