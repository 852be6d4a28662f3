//! HUD components and systems (score display)

use bevy::asset::io::file::FileAssetReader;
use bevy::prelude::*;

use crate::constants::*;
use crate::player::PlayerId;
use crate::scoring::Scoreboard;
use crate::tuning::PongTuning;
use crate::world::screen_to_world;

/// Font used for scores and the match banner
#[derive(Resource, Clone, Default)]
pub struct ScoreFont(pub Handle<Font>);

/// Load the digital score font, or fall back to Bevy's built-in font when
/// the file is not shipped next to the game.
pub fn load_score_font(asset_server: &AssetServer) -> ScoreFont {
    let path = FileAssetReader::get_base_path().join("assets").join(FONT_PATH);
    if path.exists() {
        info!("Loading score font {}", FONT_PATH);
        ScoreFont(asset_server.load(FONT_PATH))
    } else {
        warn!("Score font not found at {}, using default font", path.display());
        ScoreFont::default()
    }
}

/// Score text for one player
#[derive(Component)]
pub struct ScoreText(pub PlayerId);

/// Spawn both score texts at their side-offset positions
pub fn spawn_score_texts(
    commands: &mut Commands,
    font: &ScoreFont,
    scoreboard: &Scoreboard,
    tuning: &PongTuning,
) {
    for player in PlayerId::ALL {
        let score = scoreboard.get(player);
        let (x, y) = score.position();
        let pos = screen_to_world(tuning.bounds, x as f32, y as f32);
        commands.spawn((
            Text2d::new(score.label()),
            TextFont {
                font: font.0.clone(),
                font_size: SCORE_FONT_SIZE,
                ..default()
            },
            TextLayout::new_with_justify(Justify::Center),
            TextColor(FOREGROUND_COLOR),
            Transform::from_xyz(pos.x, pos.y, 1.0),
            ScoreText(player),
        ));
    }
}

/// Update score display
pub fn update_score_text(
    scoreboard: Res<Scoreboard>,
    mut texts: Query<(&mut Text2d, &ScoreText)>,
) {
    if !scoreboard.is_changed() {
        return;
    }
    for (mut text, score_text) in &mut texts {
        let label = scoreboard.get(score_text.0).label();
        if text.0 != label {
            text.0 = label;
        }
    }
}
