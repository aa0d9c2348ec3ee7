use bevy::prelude::*;

/// Spacing factor applied to every orbit radius so the outer planets
/// stay readable on screen.
pub const ORBIT_SPACING: f32 = 1.5;

/// Axis a body spins around in its own local frame. Saturn spins about
/// Z because its sphere is tilted 25 degrees before spinning; Uranus
/// rolls about X.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinAxis {
    X,
    Y,
    Z,
}

impl SpinAxis {
    pub fn rotation(self, degrees: f32) -> Quat {
        let radians = degrees.to_radians();
        match self {
            SpinAxis::X => Quat::from_rotation_x(radians),
            SpinAxis::Y => Quat::from_rotation_y(radians),
            SpinAxis::Z => Quat::from_rotation_z(radians),
        }
    }
}

/// Flat annulus drawn in the body's tilted equatorial plane.
#[derive(Debug, Clone, Copy)]
pub struct Ring {
    pub inner_radius: f32,
    pub outer_radius: f32,
}

/// Static description of one celestial body. The whole scene is driven
/// by the `BODIES` table below; nothing about a body is decided at
/// runtime except its current angles.
#[derive(Debug, Clone, Copy)]
pub struct BodyDescriptor {
    pub name: &'static str,
    pub texture_file: &'static str,
    /// Distance from the sun. Zero for the sun itself.
    pub orbit_radius: f32,
    /// Degrees added to the orbit angle per animation tick (before the
    /// global speed multiplier).
    pub orbit_rate: f32,
    /// Degrees added to the spin angle per animation tick.
    pub spin_rate: f32,
    pub spin_axis: SpinAxis,
    pub sphere_radius: f32,
    /// Height above the body's center where its name label is anchored.
    pub label_offset: f32,
    /// Tilt of the body's spin frame away from the orbital plane,
    /// applied about local X.
    pub axial_tilt: f32,
    /// Self-luminous bodies are rendered unlit (the sun).
    pub self_luminous: bool,
    pub ring: Option<Ring>,
}

pub const BODY_COUNT: usize = 9;

/// Draw order: sun first, then planets by increasing orbit radius.
pub const BODIES: [BodyDescriptor; BODY_COUNT] = [
    BodyDescriptor {
        name: "Sun",
        texture_file: "8k_sun.jpg",
        orbit_radius: 0.0,
        orbit_rate: 0.0,
        spin_rate: 0.5,
        spin_axis: SpinAxis::Y,
        sphere_radius: 1.0,
        label_offset: 1.3,
        axial_tilt: 0.0,
        self_luminous: true,
        ring: None,
    },
    BodyDescriptor {
        name: "Mercury",
        texture_file: "8k_mercury.jpg",
        orbit_radius: 2.0 * ORBIT_SPACING,
        orbit_rate: 0.6,
        spin_rate: 2.0,
        spin_axis: SpinAxis::Y,
        sphere_radius: 0.15,
        label_offset: 0.3,
        axial_tilt: 0.0,
        self_luminous: false,
        ring: None,
    },
    BodyDescriptor {
        name: "Venus",
        texture_file: "8k_venus_surface.jpg",
        orbit_radius: 3.5 * ORBIT_SPACING,
        orbit_rate: 0.2,
        spin_rate: 1.5,
        spin_axis: SpinAxis::Y,
        sphere_radius: 0.3,
        label_offset: 0.45,
        axial_tilt: 0.0,
        self_luminous: false,
        ring: None,
    },
    BodyDescriptor {
        name: "Earth",
        texture_file: "8k_earth_daymap.jpg",
        orbit_radius: 5.0 * ORBIT_SPACING,
        orbit_rate: 0.1,
        spin_rate: 15.0,
        spin_axis: SpinAxis::Y,
        sphere_radius: 0.4,
        label_offset: 0.55,
        axial_tilt: 0.0,
        self_luminous: false,
        ring: None,
    },
    BodyDescriptor {
        name: "Mars",
        texture_file: "8k_mars.jpg",
        orbit_radius: 6.5 * ORBIT_SPACING,
        orbit_rate: 0.06,
        spin_rate: 14.0,
        spin_axis: SpinAxis::Y,
        sphere_radius: 0.2,
        label_offset: 0.35,
        axial_tilt: 0.0,
        self_luminous: false,
        ring: None,
    },
    BodyDescriptor {
        name: "Jupiter",
        texture_file: "8k_jupiter.jpg",
        orbit_radius: 9.0 * ORBIT_SPACING,
        orbit_rate: 0.02,
        spin_rate: 30.0,
        spin_axis: SpinAxis::Y,
        sphere_radius: 1.0,
        label_offset: 1.2,
        axial_tilt: 0.0,
        self_luminous: false,
        ring: None,
    },
    BodyDescriptor {
        name: "Saturn",
        texture_file: "8k_saturn.jpg",
        orbit_radius: 11.5 * ORBIT_SPACING,
        orbit_rate: 0.008,
        spin_rate: 28.0,
        spin_axis: SpinAxis::Z,
        sphere_radius: 0.9,
        label_offset: 2.0,
        axial_tilt: 25.0,
        self_luminous: false,
        ring: Some(Ring {
            inner_radius: 0.8 * ORBIT_SPACING,
            outer_radius: 1.2 * ORBIT_SPACING,
        }),
    },
    BodyDescriptor {
        name: "Uranus",
        texture_file: "2k_uranus.jpg",
        orbit_radius: 14.0 * ORBIT_SPACING,
        orbit_rate: 0.003,
        spin_rate: 20.0,
        spin_axis: SpinAxis::X,
        sphere_radius: 0.7,
        label_offset: 0.9,
        axial_tilt: 0.0,
        self_luminous: false,
        ring: None,
    },
    BodyDescriptor {
        name: "Neptune",
        texture_file: "2k_neptune.jpg",
        orbit_radius: 16.5 * ORBIT_SPACING,
        orbit_rate: 0.001,
        spin_rate: 18.0,
        spin_axis: SpinAxis::Y,
        sphere_radius: 0.6,
        label_offset: 0.8,
        axial_tilt: 0.0,
        self_luminous: false,
        ring: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planets_ordered_by_increasing_orbit_radius() {
        let radii: Vec<f32> = BODIES.iter().skip(1).map(|b| b.orbit_radius).collect();
        for pair in radii.windows(2) {
            assert!(pair[0] < pair[1], "orbit radii out of order: {:?}", radii);
        }
    }

    #[test]
    fn only_the_sun_is_self_luminous() {
        assert!(BODIES[0].self_luminous);
        assert_eq!(BODIES[0].orbit_radius, 0.0);
        assert!(BODIES.iter().skip(1).all(|b| !b.self_luminous));
    }

    #[test]
    fn only_saturn_has_ring_and_tilt() {
        for body in &BODIES {
            if body.name == "Saturn" {
                let ring = body.ring.expect("Saturn keeps its ring");
                assert!(ring.inner_radius < ring.outer_radius);
                assert_eq!(body.axial_tilt, 25.0);
            } else {
                assert!(body.ring.is_none());
                assert_eq!(body.axial_tilt, 0.0);
            }
        }
    }

    #[test]
    fn spin_axes_match_original_layout() {
        assert_eq!(BODIES[6].name, "Saturn");
        assert_eq!(BODIES[6].spin_axis, SpinAxis::Z);
        assert_eq!(BODIES[7].name, "Uranus");
        assert_eq!(BODIES[7].spin_axis, SpinAxis::X);
    }

    #[test]
    fn spin_axis_rotation_uses_degrees() {
        let quat = SpinAxis::Y.rotation(90.0);
        let rotated = quat * Vec3::X;
        assert!((rotated - Vec3::NEG_Z).length() < 1e-5);
    }
}
