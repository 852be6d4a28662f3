//! Paddle movement systems

use bevy::prelude::*;

use crate::input::PlayerInput;
use crate::player::components::*;
use crate::tuning::PongTuning;

/// Runs in FixedUpdate to apply captured input to both paddles.
pub fn move_paddles(
    input: Res<PlayerInput>,
    tuning: Res<PongTuning>,
    mut paddles: Query<(&mut Paddle, &PlayerId)>,
) {
    for (mut paddle, player) in &mut paddles {
        let dy = input.axis(*player) * tuning.paddle_speed;
        if dy != 0 {
            paddle.translate(0, dy, tuning.bounds);
        }
    }
}

/// Put both paddles back where a match starts
pub fn reset_paddles(paddles: &mut Query<(&mut Paddle, &PlayerId)>, tuning: &PongTuning) {
    for (mut paddle, player) in paddles.iter_mut() {
        *paddle = Paddle::starting(*player, tuning);
    }
}

/// Spawn one simulation-only paddle entity per player.
///
/// Visuals are attached by the caller so headless apps can share this.
pub fn spawn_paddles(commands: &mut Commands, tuning: &PongTuning) -> [Entity; 2] {
    PlayerId::ALL.map(|player| {
        commands
            .spawn((
                Paddle::starting(player, tuning),
                player,
                crate::ball::Collider::for_player(player),
            ))
            .id()
    })
}
