//! Compact text format for game event serialization
//!
//! Format: `T:NNNNN|CODE|data...`
//! - T:NNNNN = simulation tick (5 digits, wraps at 99999)
//! - CODE = event type code
//! - data = pipe-separated values specific to event type
//!
//! Examples:
//! ```text
//! T:00000|MS|1
//! T:00212|PH|2|T
//! T:00340|WB|895
//! T:00391|G|1|1|0
//! T:09870|ME|1|11|4|9870
//! ```

use bevy::log::warn;

use super::types::GameEvent;

/// Serialize a GameEvent to compact text format
pub fn serialize_event(tick: u64, event: &GameEvent) -> String {
    let ts = format!("T:{:05}", tick % 100000);
    let code = event.type_code();

    let data = match event {
        GameEvent::SessionStart {
            session_id,
            timestamp,
        } => {
            format!("{}|{}", session_id, timestamp)
        }
        GameEvent::Config(tuning) => {
            // Compact JSON so the line stays greppable
            match tuning.to_json() {
                Ok(json) => json,
                Err(e) => {
                    warn!("Failed to serialize tuning: {}", e);
                    "{}".to_string()
                }
            }
        }
        GameEvent::MatchStart { match_number } => match_number.to_string(),
        GameEvent::MatchEnd {
            winner,
            score_one,
            score_two,
            ticks,
        } => {
            format!("{}|{}|{}|{}", winner.number(), score_one, score_two, ticks)
        }
        GameEvent::Goal {
            player,
            score_one,
            score_two,
        } => {
            format!("{}|{}|{}", player.number(), score_one, score_two)
        }
        GameEvent::PaddleHit { player, zone } => {
            format!("{}|{}", player.number(), zone.code())
        }
        GameEvent::WallBounce { y } => y.to_string(),
    };

    format!("{}|{}|{}", ts, code, data)
}
