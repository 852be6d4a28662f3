//! Gameplay tuning values read by the simulation systems

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Playfield extent in screen pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: i32,
    pub height: i32,
}

impl ScreenBounds {
    pub fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

/// Serializable snapshot of every rule the match runs with.
///
/// Defaults come from `constants`; the game never loads this from disk, but
/// tests build smaller variants (e.g. a short match) and the startup log
/// records it as JSON.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PongTuning {
    pub bounds: ScreenBounds,
    pub tick_hz: f64,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_inset: i32,
    pub paddle_start_y: i32,
    pub paddle_speed: i32,
    pub ball_radius: i32,
    pub ball_speed: i32,
    pub win_score: u32,
}

impl Default for PongTuning {
    fn default() -> Self {
        Self {
            bounds: ScreenBounds::default(),
            tick_hz: TICK_HZ,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,
            paddle_start_y: PADDLE_START_Y,
            paddle_speed: PADDLE_SPEED,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            win_score: WIN_SCORE,
        }
    }
}

impl PongTuning {
    /// Same rules, but the match ends at `win_score`
    pub fn with_win_score(mut self, win_score: u32) -> Self {
        self.win_score = win_score;
        self
    }

    /// Compact JSON for the session log
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
