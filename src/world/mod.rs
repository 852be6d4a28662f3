//! World presentation: maps screen-pixel game state onto Bevy transforms

use bevy::prelude::*;

use crate::ball::Ball;
use crate::constants::*;
use crate::player::Paddle;
use crate::tuning::{PongTuning, ScreenBounds};

/// Convert a screen point (origin top-left, y down) to world space
/// (origin at the center, y up)
pub fn screen_to_world(bounds: ScreenBounds, x: f32, y: f32) -> Vec2 {
    Vec2::new(
        x - bounds.width as f32 / 2.0,
        bounds.height as f32 / 2.0 - y,
    )
}

/// Spawn the full-height center divider
pub fn spawn_divider(commands: &mut Commands, tuning: &PongTuning) {
    commands.spawn((
        Sprite::from_color(
            FOREGROUND_COLOR,
            Vec2::new(DIVIDER_WIDTH, tuning.bounds.height as f32),
        ),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
}

/// Sprite matching a paddle's rectangle
pub fn paddle_sprite(paddle: &Paddle) -> Sprite {
    Sprite::from_color(
        FOREGROUND_COLOR,
        Vec2::new(paddle.width as f32, paddle.height as f32),
    )
}

/// Mirror paddle rectangles into their sprite transforms
pub fn sync_paddle_transforms(
    tuning: Res<PongTuning>,
    mut paddles: Query<(&Paddle, &mut Transform), Changed<Paddle>>,
) {
    for (paddle, mut transform) in &mut paddles {
        let (cx, cy) = paddle.center();
        let pos = screen_to_world(tuning.bounds, cx, cy);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
}

/// Mirror the ball center into its mesh transform
pub fn sync_ball_transform(
    tuning: Res<PongTuning>,
    mut balls: Query<(&Ball, &mut Transform), Changed<Ball>>,
) {
    for (ball, mut transform) in &mut balls {
        let pos = screen_to_world(tuning.bounds, ball.x as f32, ball.y as f32);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
}
