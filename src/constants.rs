//! Tunable constants for pong
//!
//! All gameplay values are defined here. Positions are in screen pixels with
//! the origin at the top-left corner and y growing downward.

use bevy::prelude::*;

// =============================================================================
// SCREEN
// =============================================================================

pub const SCREEN_WIDTH: i32 = 1440;
pub const SCREEN_HEIGHT: i32 = 900;

/// Simulation rate (ticks per second)
pub const TICK_HZ: f64 = 50.0;

// =============================================================================
// COLORS
// =============================================================================

pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const FOREGROUND_COLOR: Color = Color::WHITE;
pub const BANNER_BACKDROP_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.8);

// =============================================================================
// PADDLES
// =============================================================================

pub const PADDLE_WIDTH: i32 = 10;
pub const PADDLE_HEIGHT: i32 = 30;
/// Distance of each paddle from its side of the screen
pub const PADDLE_INSET: i32 = 130;
pub const PADDLE_START_Y: i32 = 425;
/// Pixels per tick at full axis deflection
pub const PADDLE_SPEED: i32 = 5;

// =============================================================================
// BALL
// =============================================================================

pub const BALL_RADIUS: i32 = 5;
/// Pixels per tick along each axis
pub const BALL_SPEED: i32 = 4;

// =============================================================================
// SCORING
// =============================================================================

pub const WIN_SCORE: u32 = 11;
/// Center of the score text before the per-side offset is applied
pub const SCORE_ANCHOR: (i32, i32) = (SCREEN_WIDTH / 2, 85);
/// Horizontal distance of each score from the anchor, opposite its side
pub const SCORE_SIDE_OFFSET: i32 = 200;

// =============================================================================
// DIVIDER / TEXT
// =============================================================================

pub const DIVIDER_WIDTH: f32 = 4.0;

pub const FONT_PATH: &str = "fonts/digital-7.ttf";
pub const SCORE_FONT_SIZE: f32 = 70.0;
pub const BANNER_FONT_SIZE: f32 = 70.0;
pub const BANNER_HINT_FONT_SIZE: f32 = 28.0;
