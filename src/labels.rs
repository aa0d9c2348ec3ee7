use bevy::prelude::*;

use crate::bodies::BODIES;
use crate::camera::SceneCamera;
use crate::scene::label_anchor;
use crate::simulation::{advance_simulation, SolarSystem};

#[derive(Component)]
struct BodyLabel(usize);

pub struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_labels)
            .add_systems(Update, position_labels.after(advance_simulation));
    }
}

fn spawn_labels(mut commands: Commands) {
    for (index, body) in BODIES.iter().enumerate() {
        commands.spawn((
            TextBundle::from_section(
                body.name,
                TextStyle {
                    font_size: 14.0,
                    color: Color::WHITE,
                    ..default()
                },
            )
            .with_style(Style {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            }),
            BodyLabel(index),
        ));
    }
}

/// Projects each body's label anchor into the viewport and parks the
/// UI text there. Labels behind the camera are hidden.
fn position_labels(
    system: Res<SolarSystem>,
    camera_query: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
    mut labels: Query<(&BodyLabel, &mut Style, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };

    for (label, mut style, mut visibility) in labels.iter_mut() {
        let body = &BODIES[label.0];
        let anchor = label_anchor(body, system.motions[label.0].orbit_degrees);
        match camera.world_to_viewport(camera_transform, anchor) {
            Some(screen) => {
                style.left = Val::Px(screen.x);
                style.top = Val::Px(screen.y);
                *visibility = Visibility::Visible;
            }
            None => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}
