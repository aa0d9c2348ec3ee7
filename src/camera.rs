use bevy::prelude::*;
use bevy::render::camera::PerspectiveProjection;

pub const ZOOM_MIN: f32 = 5.0;
pub const ZOOM_MAX: f32 = 50.0;
pub const ZOOM_STEP: f32 = 0.5;

#[derive(Component)]
pub struct SceneCamera;

/// The three fixed camera placements, all looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Default,
    Top,
    Perspective,
}

impl ViewMode {
    pub fn next(self) -> Self {
        match self {
            ViewMode::Default => ViewMode::Top,
            ViewMode::Top => ViewMode::Perspective,
            ViewMode::Perspective => ViewMode::Default,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct ViewState {
    pub mode: ViewMode,
    /// Distance parameter for all three placements. Note the inherited
    /// mapping: '+' shrinks this value (zooms in), '-' grows it.
    pub zoom: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            mode: ViewMode::Default,
            zoom: 25.0,
        }
    }
}

impl ViewState {
    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
        info!("View mode: {:?}", self.mode);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
    }

    /// Eye position and up vector for the current placement.
    pub fn eye_and_up(&self) -> (Vec3, Vec3) {
        match self.mode {
            ViewMode::Default => (Vec3::new(0.0, 5.0, self.zoom), Vec3::Y),
            ViewMode::Top => (Vec3::new(0.0, self.zoom, 0.0), Vec3::NEG_Z),
            ViewMode::Perspective => (Vec3::splat(self.zoom / 1.5), Vec3::Y),
        }
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewState>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                apply_view
                    .after(crate::input::keyboard_controls)
                    .after(crate::input::mouse_controls),
            );
    }
}

fn setup_camera(mut commands: Commands, view: Res<ViewState>) {
    let (eye, up) = view.eye_and_up();
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_translation(eye).looking_at(Vec3::ZERO, up),
            projection: PerspectiveProjection {
                fov: 60.0_f32.to_radians(),
                near: 1.0,
                far: 100.0,
                ..default()
            }
            .into(),
            ..default()
        },
        SceneCamera,
    ));
}

fn apply_view(view: Res<ViewState>, mut query: Query<&mut Transform, With<SceneCamera>>) {
    if !view.is_changed() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    let (eye, up) = view.eye_and_up();
    *transform = Transform::from_translation(eye).looking_at(Vec3::ZERO, up);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_clamps_at_both_ends() {
        let mut view = ViewState::default();
        // 60 consecutive zoom-in presses from 25.0 bottom out at 5.0.
        for _ in 0..60 {
            view.zoom_in();
        }
        assert_eq!(view.zoom, ZOOM_MIN);

        for _ in 0..200 {
            view.zoom_out();
        }
        assert_eq!(view.zoom, ZOOM_MAX);
    }

    #[test]
    fn view_mode_cycles_with_period_three() {
        let mut view = ViewState::default();
        let start = view.mode;
        view.cycle_mode();
        assert_eq!(view.mode, ViewMode::Top);
        view.cycle_mode();
        assert_eq!(view.mode, ViewMode::Perspective);
        view.cycle_mode();
        assert_eq!(view.mode, start);
    }

    #[test]
    fn placements_look_from_expected_eyes() {
        let view = ViewState::default();
        let (eye, up) = view.eye_and_up();
        assert_eq!(eye, Vec3::new(0.0, 5.0, 25.0));
        assert_eq!(up, Vec3::Y);

        let top = ViewState {
            mode: ViewMode::Top,
            zoom: 30.0,
        };
        let (eye, up) = top.eye_and_up();
        assert_eq!(eye, Vec3::new(0.0, 30.0, 0.0));
        assert_eq!(up, Vec3::NEG_Z);

        let corner = ViewState {
            mode: ViewMode::Perspective,
            zoom: 30.0,
        };
        let (eye, _) = corner.eye_and_up();
        assert_eq!(eye, Vec3::splat(20.0));
    }
}
