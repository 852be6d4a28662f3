//! Event logger - writes drained bus events to the application log

use bevy::prelude::*;
use uuid::Uuid;

use super::bus::EventBus;
use super::format::serialize_event;
use super::types::GameEvent;
use crate::tuning::PongTuning;

/// Identifies one launch of the game in the log
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub started_at: String,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            started_at: chrono::Local::now().to_rfc3339(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Startup: announce the session, its rules and the first match
pub fn start_session(tuning: Res<PongTuning>, mut bus: ResMut<EventBus>) {
    let session = Session::new();
    info!("Session {} started at {}", session.id, session.started_at);
    bus.emit(GameEvent::SessionStart {
        session_id: session.id,
        timestamp: session.started_at,
    });
    bus.emit(GameEvent::Config(tuning.clone()));
    bus.emit(GameEvent::MatchStart { match_number: 1 });
}

/// Drain the bus into the log. Ball events go to debug level.
pub fn log_game_events(mut bus: ResMut<EventBus>) {
    for entry in bus.drain() {
        let line = serialize_event(entry.tick, &entry.event);
        if entry.event.is_verbose() {
            debug!("{}", line);
        } else {
            info!("{}", line);
        }
    }
}
