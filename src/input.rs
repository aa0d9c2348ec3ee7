use bevy::prelude::*;
use rand::thread_rng;

use crate::camera::ViewState;
use crate::meteor::MeteorState;
use crate::simulation::AnimationState;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (keyboard_controls, mouse_controls));
    }
}

pub fn keyboard_controls(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut animation: ResMut<AnimationState>,
    mut view: ResMut<ViewState>,
    mut meteor: ResMut<MeteorState>,
    mut exit: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::KeyB) {
        animation.toggle();
    }
    if keyboard.just_pressed(KeyCode::KeyM) {
        if meteor.active {
            meteor.active = false;
        } else {
            meteor.activate(&mut thread_rng());
        }
    }
    if keyboard.just_pressed(KeyCode::Digit2) {
        animation.speed_up();
    }
    if keyboard.just_pressed(KeyCode::Digit1) {
        animation.slow_down();
    }
    // Inherited mapping: '+' moves the eye closer, '-' pulls it back.
    if keyboard.just_pressed(KeyCode::Equal) || keyboard.just_pressed(KeyCode::NumpadAdd) {
        view.zoom_in();
    }
    if keyboard.just_pressed(KeyCode::Minus) || keyboard.just_pressed(KeyCode::NumpadSubtract) {
        view.zoom_out();
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}

pub fn mouse_controls(
    buttons: Res<ButtonInput<MouseButton>>,
    mut view: ResMut<ViewState>,
    mut animation: ResMut<AnimationState>,
) {
    if buttons.just_pressed(MouseButton::Left) {
        view.cycle_mode();
    }
    if buttons.just_pressed(MouseButton::Right) {
        animation.toggle();
    }
}
