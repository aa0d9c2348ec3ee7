use bevy::prelude::*;
use rand::prelude::*;

/// Distance the meteor falls per tick on both axes.
pub const METEOR_SPEED: f32 = 0.1;
/// Once either coordinate drops below this, the meteor respawns.
pub const RESET_THRESHOLD: f32 = -25.0;
/// Respawn coordinates land in [RESET_BASE, RESET_BASE + RESET_RANGE).
pub const RESET_BASE: f32 = 25.0;
pub const RESET_RANGE: u32 = 10;

/// Decorative shooting star, independent of the orbital hierarchy. It
/// keeps falling even while the planet animation is paused.
#[derive(Resource, Debug, Clone)]
pub struct MeteorState {
    pub active: bool,
    pub position: Vec2,
    pub speed: f32,
}

impl Default for MeteorState {
    fn default() -> Self {
        Self {
            active: false,
            position: Vec2::splat(RESET_BASE),
            speed: METEOR_SPEED,
        }
    }
}

impl MeteorState {
    /// Turn the shower on, starting from a fresh corner.
    pub fn activate(&mut self, rng: &mut impl Rng) {
        self.active = true;
        self.position = Self::reset_position(rng);
        info!("Meteor shower started at {:?}", self.position);
    }

    /// One animation tick: fall diagonally, respawn once off screen.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        self.position -= Vec2::splat(self.speed);
        if self.position.x < RESET_THRESHOLD || self.position.y < RESET_THRESHOLD {
            self.position = Self::reset_position(rng);
        }
    }

    fn reset_position(rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            RESET_BASE + rng.gen_range(0..RESET_RANGE) as f32,
            RESET_BASE + rng.gen_range(0..RESET_RANGE) as f32,
        )
    }
}

#[derive(Component)]
struct MeteorRoot;

pub struct MeteorPlugin;

impl Plugin for MeteorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MeteorState>()
            .add_systems(Startup, spawn_meteor)
            .add_systems(Update, (update_meteor, sync_meteor).chain());
    }
}

/// Three shrinking unlit spheres trailing up-right, matching the
/// original's glow colors.
fn spawn_meteor(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let head_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 1.0, 0.8),
        unlit: true,
        ..default()
    });
    let trail_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.8, 0.7),
        unlit: true,
        ..default()
    });

    commands
        .spawn((SpatialBundle::HIDDEN_IDENTITY, MeteorRoot))
        .with_children(|parent| {
            parent.spawn(PbrBundle {
                mesh: meshes.add(Sphere::new(0.1).mesh().uv(10, 10)),
                material: head_material,
                ..default()
            });
            parent.spawn(PbrBundle {
                mesh: meshes.add(Sphere::new(0.07).mesh().uv(8, 8)),
                material: trail_material.clone(),
                ..default()
            });
            parent.spawn(PbrBundle {
                mesh: meshes.add(Sphere::new(0.04).mesh().uv(6, 6)),
                material: trail_material,
                transform: Transform::from_xyz(0.1, 0.1, 0.0),
                ..default()
            });
        });
}

fn update_meteor(mut meteor: ResMut<MeteorState>) {
    if meteor.active {
        meteor.tick(&mut thread_rng());
    }
}

fn sync_meteor(
    meteor: Res<MeteorState>,
    mut query: Query<(&mut Transform, &mut Visibility), With<MeteorRoot>>,
) {
    let Ok((mut transform, mut visibility)) = query.get_single_mut() else {
        return;
    };
    transform.translation = meteor.position.extend(0.0);
    *visibility = if meteor.active {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn position_decays_monotonically_until_reset() {
        let mut rng = StepRng::new(0, 0x9e37_79b9_7f4a_7c15);
        let mut meteor = MeteorState::default();
        meteor.activate(&mut rng);

        let mut previous = meteor.position;
        loop {
            meteor.tick(&mut rng);
            if meteor.position.x > previous.x {
                // Reset fired; both coordinates land back in range.
                assert!(meteor.position.x >= RESET_BASE);
                assert!(meteor.position.x < RESET_BASE + RESET_RANGE as f32);
                assert!(meteor.position.y >= RESET_BASE);
                assert!(meteor.position.y < RESET_BASE + RESET_RANGE as f32);
                break;
            }
            assert!(meteor.position.x < previous.x);
            assert!(meteor.position.y < previous.y);
            previous = meteor.position;
        }
    }

    #[test]
    fn reset_fires_just_past_the_threshold() {
        let mut rng = StepRng::new(0, 1);
        let mut meteor = MeteorState {
            active: true,
            position: Vec2::new(RESET_THRESHOLD + 0.05, 0.0),
            speed: METEOR_SPEED,
        };
        meteor.tick(&mut rng);
        assert!(meteor.position.x >= RESET_BASE);
        assert!(meteor.position.y >= RESET_BASE);
    }

    #[test]
    fn activation_resets_position_into_starting_corner() {
        let mut rng = StepRng::new(0, 0x1234_5678);
        let mut meteor = MeteorState {
            position: Vec2::new(-10.0, -10.0),
            ..default()
        };
        meteor.activate(&mut rng);
        assert!(meteor.active);
        assert!(meteor.position.min_element() >= RESET_BASE);
        assert!(meteor.position.max_element() < RESET_BASE + RESET_RANGE as f32);
    }

    #[test]
    fn inactive_meteor_starts_hidden() {
        let meteor = MeteorState::default();
        assert!(!meteor.active);
        assert_eq!(meteor.position, Vec2::splat(25.0));
    }
}
