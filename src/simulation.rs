use bevy::prelude::*;
use rand::prelude::*;

use crate::bodies::{BODIES, BODY_COUNT};

/// Per-step increment for the global speed multiplier.
pub const SPEED_STEP: f32 = 0.05;

/// Current orbit/spin phase of one body, both in degrees, always kept
/// in [0, 360).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyMotion {
    pub orbit_degrees: f32,
    pub spin_degrees: f32,
}

/// Angle accumulators for every body, indexed like `BODIES`.
#[derive(Resource, Debug, Clone)]
pub struct SolarSystem {
    pub motions: [BodyMotion; BODY_COUNT],
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self {
            motions: [BodyMotion::default(); BODY_COUNT],
        }
    }
}

impl SolarSystem {
    /// Starting layout: every planet begins at a random whole-degree
    /// point of its orbit so they never line up. Spin phases start at
    /// zero, as does the sun.
    pub fn with_random_phases(rng: &mut impl Rng) -> Self {
        let mut system = Self::default();
        for motion in system.motions.iter_mut().skip(1) {
            motion.orbit_degrees = rng.gen_range(0..360) as f32;
        }
        system
    }

    /// Advance every angle accumulator by one animation tick: each body
    /// gains its fixed rate scaled by the speed multiplier, wrapped back
    /// into [0, 360).
    pub fn advance(&mut self, speed: f32) {
        for (motion, body) in self.motions.iter_mut().zip(BODIES.iter()) {
            motion.orbit_degrees = (motion.orbit_degrees + body.orbit_rate * speed).rem_euclid(360.0);
            motion.spin_degrees = (motion.spin_degrees + body.spin_rate * speed).rem_euclid(360.0);
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct AnimationState {
    pub running: bool,
    pub speed: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            running: true,
            speed: 0.2,
        }
    }
}

impl AnimationState {
    pub fn toggle(&mut self) {
        self.running = !self.running;
        info!(
            "Animation {}",
            if self.running { "resumed" } else { "paused" }
        );
    }

    pub fn speed_up(&mut self) {
        self.speed += SPEED_STEP;
    }

    pub fn slow_down(&mut self) {
        self.speed = (self.speed - SPEED_STEP).max(0.0);
    }
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SolarSystem::with_random_phases(&mut thread_rng()))
            .init_resource::<AnimationState>()
            .add_systems(Update, advance_simulation);
    }
}

/// One animation tick per frame, matching the original idle-callback
/// stepping (fixed increments, not wall-clock scaled).
pub fn advance_simulation(animation: Res<AnimationState>, mut system: ResMut<SolarSystem>) {
    if animation.running {
        system.advance(animation.speed);
    }
}
