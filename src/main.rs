//! Pong - a two-player table tennis game built with Bevy
//!
//! Main entry point: window setup, visuals, and system registration.

use bevy::{
    camera::ScalingMode,
    prelude::*,
    window::{MonitorSelection, WindowMode, WindowResolution},
};
use pong::{
    Ball, Paddle, PlayerId, PongTuning, ScoreFont, Scoreboard, constants::*, simulation, ui,
    world,
};

fn main() -> AppExit {
    let tuning = PongTuning::default();

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            // Set scale_factor_override to 1.0 so one game pixel is one screen pixel
            resolution: WindowResolution::new(
                tuning.bounds.width as u32,
                tuning.bounds.height as u32,
            )
            .with_scale_factor_override(1.0),
            title: "Pong".into(),
            mode: WindowMode::BorderlessFullscreen(MonitorSelection::Primary),
            decorations: false,
            resizable: false,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(BACKGROUND_COLOR));

    simulation::insert_match_resources(&mut app, tuning);
    simulation::add_simulation_systems(&mut app);

    app.add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                world::sync_paddle_transforms,
                world::sync_ball_transform,
                ui::update_score_text,
                ui::update_match_banner,
            ),
        )
        .run()
}

/// Setup the court: camera, paddles, ball, divider, scores, banner
fn setup(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    tuning: Res<PongTuning>,
    scoreboard: Res<Scoreboard>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // Camera - orthographic, shows the whole court
    // FixedVertical keeps the full court height visible regardless of window size
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, 0.0, 0.0),
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: tuning.bounds.height as f32,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));

    let entities = simulation::spawn_match(&mut commands, &tuning);

    for (player, entity) in PlayerId::ALL.into_iter().zip(entities.paddles) {
        let paddle = Paddle::starting(player, &tuning);
        let (cx, cy) = paddle.center();
        let pos = world::screen_to_world(tuning.bounds, cx, cy);
        commands.entity(entity).insert((
            world::paddle_sprite(&paddle),
            Transform::from_xyz(pos.x, pos.y, 2.0),
        ));
    }

    let ball = Ball::serve(&tuning);
    let pos = world::screen_to_world(tuning.bounds, ball.x as f32, ball.y as f32);
    commands.entity(entities.ball).insert((
        Mesh2d(meshes.add(Circle::new(ball.radius as f32))),
        MeshMaterial2d(materials.add(FOREGROUND_COLOR)),
        Transform::from_xyz(pos.x, pos.y, 3.0),
    ));

    world::spawn_divider(&mut commands, &tuning);

    let font = ui::load_score_font(&asset_server);
    ui::spawn_score_texts(&mut commands, &font, &scoreboard, &tuning);
    ui::spawn_match_banner(&mut commands, &font, &tuning);
    commands.insert_resource::<ScoreFont>(font);

    info!(
        "Court ready: {}x{} at {} Hz, first to {}",
        tuning.bounds.width, tuning.bounds.height, tuning.tick_hz, tuning.win_score
    );
}
