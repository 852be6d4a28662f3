//! Ball physics systems

use bevy::prelude::*;

use crate::ball::components::*;
use crate::events::{EventBus, GameEvent};
use crate::tuning::PongTuning;

/// Apply one tick of motion to the ball and bound it between the walls
pub fn advance_ball(
    tuning: Res<PongTuning>,
    mut event_bus: ResMut<EventBus>,
    mut balls: Query<&mut Ball>,
) {
    for mut ball in &mut balls {
        if ball.advance(tuning.bounds) {
            event_bus.emit(GameEvent::WallBounce { y: ball.y });
        }
    }
}

/// Spawn the simulation-only ball entity at the center of the court
pub fn spawn_ball(commands: &mut Commands, tuning: &PongTuning) -> Entity {
    commands.spawn(Ball::serve(tuning)).id()
}
