//! Match-over banner: announces the winner and offers a rematch
//!
//! Shown once the referee finishes the match. R starts a rematch, Enter
//! (or Escape, handled with the rest of the input) quits.

use bevy::prelude::*;

use crate::ball::{Ball, Heading};
use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::player::{Paddle, PlayerId, reset_paddles};
use crate::scoring::{Referee, Scoreboard};
use crate::tuning::PongTuning;
use crate::ui::ScoreFont;

/// Root entity of the banner (toggled visible/hidden)
#[derive(Component)]
pub struct MatchBanner;

/// Winner line inside the banner
#[derive(Component)]
pub struct BannerTitle;

/// Banner text for a finished match
pub fn winner_message(winner: PlayerId) -> String {
    format!("Player {} wins!", winner.number())
}

/// Spawn the (hidden) match-over banner
pub fn spawn_match_banner(commands: &mut Commands, font: &ScoreFont, tuning: &PongTuning) {
    commands
        .spawn((
            Transform::from_xyz(0.0, 0.0, 50.0),
            Visibility::Hidden,
            MatchBanner,
        ))
        .with_children(|parent| {
            parent.spawn((
                Sprite::from_color(
                    BANNER_BACKDROP_COLOR,
                    Vec2::new(tuning.bounds.width as f32 / 2.0, 220.0),
                ),
                Transform::from_xyz(0.0, 0.0, 0.0),
            ));
            parent.spawn((
                Text2d::new(""),
                TextFont {
                    font: font.0.clone(),
                    font_size: BANNER_FONT_SIZE,
                    ..default()
                },
                TextLayout::new_with_justify(Justify::Center),
                TextColor(FOREGROUND_COLOR),
                Transform::from_xyz(0.0, 30.0, 1.0),
                BannerTitle,
            ));
            parent.spawn((
                Text2d::new("R: rematch   Esc/Enter: quit"),
                TextFont {
                    font_size: BANNER_HINT_FONT_SIZE,
                    ..default()
                },
                TextLayout::new_with_justify(Justify::Center),
                TextColor(FOREGROUND_COLOR),
                Transform::from_xyz(0.0, -50.0, 1.0),
            ));
        });
}

/// Show the banner while the match is finished, hide it otherwise
pub fn update_match_banner(
    referee: Res<Referee>,
    mut banners: Query<&mut Visibility, With<MatchBanner>>,
    mut titles: Query<&mut Text2d, With<BannerTitle>>,
) {
    if !referee.is_changed() {
        return;
    }

    let winner = referee.winner();
    for mut visibility in &mut banners {
        *visibility = if winner.is_some() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
    if let Some(winner) = winner {
        for mut title in &mut titles {
            title.0 = winner_message(winner);
        }
    }
}

/// Keys accepted on the banner: R for a rematch, Enter to quit
pub fn handle_match_over_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<PongTuning>,
    mut referee: ResMut<Referee>,
    mut scoreboard: ResMut<Scoreboard>,
    mut event_bus: ResMut<EventBus>,
    mut balls: Query<&mut Ball>,
    mut paddles: Query<(&mut Paddle, &PlayerId)>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        info!("Match over, exiting");
        exit.write(AppExit::Success);
        return;
    }

    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }
    let Some(winner) = referee.winner() else {
        return;
    };

    // Serve toward the player who lost
    let heading = match winner {
        PlayerId::One => Heading::Left,
        PlayerId::Two => Heading::Right,
    };
    for mut ball in &mut balls {
        ball.reset(heading, tuning.bounds);
    }
    reset_paddles(&mut paddles, &tuning);
    scoreboard.reset();
    referee.start_next_match();

    event_bus.emit(GameEvent::MatchStart {
        match_number: referee.match_number,
    });
    info!("Rematch {} started", referee.match_number);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::MatchState;
    use bevy::ecs::system::RunSystemOnce;

    fn visibility(app: &App, entity: Entity) -> Option<Visibility> {
        app.world().get::<Visibility>(entity).copied()
    }

    #[test]
    fn test_winner_message() {
        assert_eq!(winner_message(PlayerId::One), "Player 1 wins!");
        assert_eq!(winner_message(PlayerId::Two), "Player 2 wins!");
    }

    #[test]
    fn test_banner_shows_winner_until_rematch() {
        let mut app = App::new();
        app.insert_resource(Referee::new(1));
        app.add_systems(Update, update_match_banner);
        let banner = app
            .world_mut()
            .spawn((Visibility::Hidden, MatchBanner))
            .id();
        let title = app.world_mut().spawn((Text2d::new(""), BannerTitle)).id();

        app.update();
        assert_eq!(visibility(&app, banner), Some(Visibility::Hidden));

        app.world_mut().resource_mut::<Referee>().state = MatchState::Finished {
            winner: PlayerId::Two,
        };
        app.update();
        assert_eq!(visibility(&app, banner), Some(Visibility::Visible));
        assert_eq!(
            app.world().get::<Text2d>(title).map(|t| t.0.as_str()),
            Some("Player 2 wins!")
        );

        app.world_mut().resource_mut::<Referee>().start_next_match();
        app.update();
        assert_eq!(visibility(&app, banner), Some(Visibility::Hidden));
    }

    #[test]
    fn test_enter_on_banner_exits() {
        let mut app = App::new();
        let mut referee = Referee::new(1);
        referee.state = MatchState::Finished {
            winner: PlayerId::One,
        };
        app.insert_resource(referee)
            .insert_resource(PongTuning::default())
            .init_resource::<Scoreboard>()
            .init_resource::<EventBus>()
            .init_resource::<ButtonInput<KeyCode>>();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Enter);

        app.world_mut()
            .run_system_once(handle_match_over_input)
            .expect("match-over input runs");

        assert_eq!(app.should_exit(), Some(AppExit::Success));
        // Quitting is not a rematch
        assert!(app.world().resource::<Referee>().is_finished());
        assert_eq!(app.world().resource::<EventBus>().pending_count(), 0);
    }
}

