//! Headless App Builder
//!
//! Builds a windowless Bevy app with the full simulation schedule. Tests
//! press keys on `ButtonInput<KeyCode>` and run `FixedUpdate` tick by tick.

use bevy::prelude::*;

use crate::events::EventBus;
use crate::tuning::PongTuning;

use super::{add_simulation_systems, insert_match_resources, spawn_match};

/// Builder for creating headless Bevy apps
pub struct HeadlessAppBuilder {
    tuning: PongTuning,
    events_enabled: bool,
}

impl Default for HeadlessAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessAppBuilder {
    /// Create a new builder with default rules
    pub fn new() -> Self {
        Self {
            tuning: PongTuning::default(),
            events_enabled: true,
        }
    }

    /// Shorter (or longer) matches
    pub fn with_win_score(mut self, win_score: u32) -> Self {
        self.tuning = self.tuning.with_win_score(win_score);
        self
    }

    /// Drop all bus events instead of collecting them
    pub fn without_events(mut self) -> Self {
        self.events_enabled = false;
        self
    }

    /// Build the app with minimal plugins and every match resource
    ///
    /// The returned app has:
    /// - MinimalPlugins (no window, no renderer)
    /// - A keyboard `ButtonInput` resource nobody updates but the caller
    /// - Match resources, simulation systems, and a Startup system that
    ///   spawns paddles and ball
    pub fn build(self) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<ButtonInput<KeyCode>>();

        if !self.events_enabled {
            app.insert_resource(EventBus::disabled());
        }
        insert_match_resources(&mut app, self.tuning);
        add_simulation_systems(&mut app);
        app.add_systems(Startup, spawn_headless_match);

        app
    }
}

fn spawn_headless_match(mut commands: Commands, tuning: Res<PongTuning>) {
    spawn_match(&mut commands, &tuning);
}
