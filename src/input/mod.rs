//! Input module - PlayerInput resource and capture_input system

use bevy::prelude::*;

use crate::player::PlayerId;

/// Per-tick movement intent for both paddles.
///
/// Level-triggered: every update reflects only the keys held right now.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayerInput {
    axes: [i32; 2],
    pub quit: bool,
}

impl PlayerInput {
    /// Poll current key state. Returns `false` once quit (Escape) is held.
    pub fn update(&mut self, keyboard: &ButtonInput<KeyCode>) -> bool {
        // Player 1: arrow keys
        self.axes[0] = Self::axis_from(keyboard, KeyCode::ArrowUp, KeyCode::ArrowDown);
        // Player 2: W/S
        self.axes[1] = Self::axis_from(keyboard, KeyCode::KeyW, KeyCode::KeyS);

        self.quit = keyboard.pressed(KeyCode::Escape);
        !self.quit
    }

    /// Last computed axis for `player` (-1 = up, 1 = down)
    pub fn axis(&self, player: PlayerId) -> i32 {
        match player {
            PlayerId::One => self.axes[0],
            PlayerId::Two => self.axes[1],
        }
    }

    // Up takes priority when both keys are held
    fn axis_from(keyboard: &ButtonInput<KeyCode>, up: KeyCode, down: KeyCode) -> i32 {
        if keyboard.pressed(up) {
            -1
        } else if keyboard.pressed(down) {
            1
        } else {
            0
        }
    }
}

/// First step of every tick: sample the keyboard and stop the app on quit.
pub fn capture_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<PlayerInput>,
    mut exit: MessageWriter<AppExit>,
) {
    if !input.update(&keyboard) {
        info!("Quit requested");
        exit.write(AppExit::Success);
    }
}
