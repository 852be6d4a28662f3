//! Simulation module - match resources and the fixed-tick system schedule
//!
//! Shared by the windowed game and the headless test apps. One FixedUpdate
//! tick runs: input, paddle movement, collisions, ball motion, scoring.

pub mod app_builder;

pub use app_builder::HeadlessAppBuilder;

use bevy::prelude::*;

use crate::ball::{advance_ball, resolve_collisions, spawn_ball};
use crate::events::{EventBus, advance_event_tick, log_game_events, start_session};
use crate::input::{PlayerInput, capture_input};
use crate::player::{move_paddles, spawn_paddles};
use crate::scoring::{Referee, Scoreboard, check_scoring, match_finished, match_in_play};
use crate::tuning::PongTuning;
use crate::ui::handle_match_over_input;

/// Entities making up one match
#[derive(Debug, Clone, Copy)]
pub struct MatchEntities {
    /// Indexed by player: `[one, two]`
    pub paddles: [Entity; 2],
    pub ball: Entity,
}

/// Spawn paddles (with colliders) and the ball, without any visuals
pub fn spawn_match(commands: &mut Commands, tuning: &PongTuning) -> MatchEntities {
    MatchEntities {
        paddles: spawn_paddles(commands, tuning),
        ball: spawn_ball(commands, tuning),
    }
}

/// Insert every resource the simulation reads, built from `tuning`
pub fn insert_match_resources(app: &mut App, tuning: PongTuning) {
    app.insert_resource(Time::<Fixed>::from_hz(tuning.tick_hz))
        .insert_resource(Referee::new(tuning.win_score))
        .init_resource::<Scoreboard>()
        .init_resource::<PlayerInput>()
        .init_resource::<EventBus>()
        .insert_resource(tuning);
}

/// Register the tick chain plus the logic systems that run every frame
pub fn add_simulation_systems(app: &mut App) {
    app.add_systems(Startup, start_session)
        .add_systems(
            FixedUpdate,
            (
                capture_input,
                (move_paddles, resolve_collisions, advance_ball, check_scoring)
                    .chain()
                    .run_if(match_in_play),
                advance_event_tick,
            )
                .chain(),
        )
        .add_systems(
            Update,
            (
                handle_match_over_input.run_if(match_finished),
                log_game_events,
            )
                .chain(),
        );
}
