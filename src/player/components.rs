//! Player-related components

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::tuning::{PongTuning, ScreenBounds};

/// Player identifier.
///
/// Player one defends the right side (arrow keys), player two the left (W/S).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// 1-based number used in text and logs
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Horizontal sign of this player's half of the court (+1 = right)
    pub fn court_side(self) -> i32 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => -1,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.number())
    }
}

/// Axis-aligned paddle rectangle in screen pixels (top-left corner, y down)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Paddle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Paddle at its match-start position for `player`
    pub fn starting(player: PlayerId, tuning: &PongTuning) -> Self {
        let x = match player {
            PlayerId::One => tuning.bounds.width - tuning.paddle_inset,
            PlayerId::Two => tuning.paddle_inset,
        };
        Self::new(x, tuning.paddle_start_y, tuning.paddle_width, tuning.paddle_height)
    }

    /// Jump to an absolute position, clamped into the screen
    pub fn move_to(&mut self, x: i32, y: i32, bounds: ScreenBounds) {
        self.x = x;
        self.y = y;
        self.clamp_to(bounds);
    }

    /// Offset by a delta, clamped into the screen
    pub fn translate(&mut self, dx: i32, dy: i32, bounds: ScreenBounds) {
        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
        self.clamp_to(bounds);
    }

    fn clamp_to(&mut self, bounds: ScreenBounds) {
        self.x = self.x.clamp(0, (bounds.width - self.width).max(0));
        self.y = self.y.clamp(0, (bounds.height - self.height).max(0));
    }

    /// Rectangle center, used for presentation
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }
}
