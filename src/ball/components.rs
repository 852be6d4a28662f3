//! Ball-related components

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::tuning::{PongTuning, ScreenBounds};

/// Horizontal direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    /// Signed x direction (-1 or +1)
    pub fn dx(self) -> i32 {
        match self {
            Heading::Left => -1,
            Heading::Right => 1,
        }
    }
}

/// The pong ball: center position, per-axis direction and scalar speed.
///
/// `vx`/`vy` stay in {-1, 0, 1}; the distance covered per tick on each axis
/// is `direction * speed`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub vx: i32,
    pub vy: i32,
    pub speed: i32,
}

impl Ball {
    pub fn new(x: i32, y: i32, radius: i32, speed: i32) -> Self {
        Self {
            x,
            y,
            radius,
            vx: 1,
            vy: 1,
            speed,
        }
    }

    /// Ball at the center of the court, heading down-right
    pub fn serve(tuning: &PongTuning) -> Self {
        let (x, y) = tuning.bounds.center();
        Self::new(x, y, tuning.ball_radius, tuning.ball_speed)
    }

    /// One tick of motion followed by the top/bottom wall bound.
    ///
    /// Returns true if the ball bounced off a wall this tick.
    pub fn advance(&mut self, bounds: ScreenBounds) -> bool {
        self.x += self.vx * self.speed;
        self.y += self.vy * self.speed;

        if self.y > bounds.height - self.radius {
            self.y = bounds.height - self.radius;
            self.vy = -1;
            true
        } else if self.y < self.radius {
            self.y = self.radius;
            self.vy = 1;
            true
        } else {
            false
        }
    }

    /// Recenter after a point: travel toward `heading`, flip vertical direction
    pub fn reset(&mut self, heading: Heading, bounds: ScreenBounds) {
        (self.x, self.y) = bounds.center();
        self.vx = heading.dx();
        self.vy = -self.vy;
    }

    /// Left of the court's left edge
    pub fn exited_left(&self) -> bool {
        self.x < 0
    }

    /// Right of the court's right edge
    pub fn exited_right(&self, bounds: ScreenBounds) -> bool {
        self.x > bounds.width
    }
}
