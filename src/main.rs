use bevy::prelude::*;
use bevy::window::PresentMode;

mod bodies;
mod camera;
mod input;
mod labels;
mod meteor;
mod scene;
mod simulation;
mod texture;

use camera::CameraPlugin;
use input::InputPlugin;
use labels::LabelPlugin;
use meteor::MeteorPlugin;
use scene::ScenePlugin;
use simulation::SimulationPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Realistic Solar System with Lit Labels".into(),
                resolution: (1024., 768.).into(),
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            SimulationPlugin,
            ScenePlugin,
            CameraPlugin,
            InputPlugin,
            MeteorPlugin,
            LabelPlugin,
        ))
        .run();
}
