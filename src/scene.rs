use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use crate::bodies::{BodyDescriptor, BODIES};
use crate::simulation::{advance_simulation, SolarSystem};
use crate::texture::load_body_texture;

const RING_SEGMENTS: usize = 360;
const ORBIT_GUIDE_SEGMENTS: usize = 360;

/// Carries a body's orbit rotation, translation out to its orbit
/// radius, and axial tilt. The spinning sphere hangs underneath it.
#[derive(Component)]
pub struct BodyPivot(pub usize);

/// The textured sphere itself; its local rotation is the spin angle.
#[derive(Component)]
pub struct BodySphere(pub usize);

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: 30.0,
            })
            .add_systems(Startup, spawn_solar_system)
            .add_systems(
                Update,
                (
                    sync_body_transforms.after(advance_simulation),
                    draw_orbit_guides,
                ),
            );
    }
}

/// World transform of a body's pivot frame, composed explicitly:
/// orbit rotation about the vertical axis, translation out along the
/// primary axis, then the axial tilt.
pub fn body_pivot_transform(body: &BodyDescriptor, orbit_degrees: f32) -> Transform {
    let orbit = Quat::from_rotation_y(orbit_degrees.to_radians());
    let tilt = Quat::from_rotation_x(body.axial_tilt.to_radians());
    Transform {
        translation: orbit * (Vec3::X * body.orbit_radius),
        rotation: orbit * tilt,
        scale: Vec3::ONE,
    }
}

/// World-space anchor point for a body's name label, offset straight
/// up in the pivot frame (so Saturn's label tilts with it).
pub fn label_anchor(body: &BodyDescriptor, orbit_degrees: f32) -> Vec3 {
    body_pivot_transform(body, orbit_degrees).transform_point(Vec3::Y * body.label_offset)
}

fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    system: Res<SolarSystem>,
) {
    // The sun is the only light source; everything else is lit by it.
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            color: Color::WHITE,
            intensity: 50_000_000.0,
            range: 100.0,
            shadows_enabled: false,
            ..default()
        },
        transform: Transform::from_translation(Vec3::ZERO),
        ..default()
    });

    for (index, body) in BODIES.iter().enumerate() {
        let texture = load_body_texture(body.texture_file).map(|img| images.add(img));
        let material = materials.add(body_material(body, texture));
        let motion = system.motions[index];

        commands
            .spawn((
                SpatialBundle::from_transform(body_pivot_transform(body, motion.orbit_degrees)),
                BodyPivot(index),
            ))
            .with_children(|parent| {
                parent.spawn((
                    PbrBundle {
                        mesh: meshes.add(Sphere::new(body.sphere_radius).mesh().uv(40, 16)),
                        material,
                        transform: Transform::from_rotation(
                            body.spin_axis.rotation(motion.spin_degrees),
                        ),
                        ..default()
                    },
                    BodySphere(index),
                ));

                if let Some(ring) = body.ring {
                    parent.spawn(PbrBundle {
                        mesh: meshes
                            .add(annulus_mesh(ring.inner_radius, ring.outer_radius, RING_SEGMENTS)),
                        material: materials.add(StandardMaterial {
                            base_color: Color::srgb(0.7, 0.6, 0.4),
                            perceptual_roughness: 1.0,
                            metallic: 0.0,
                            reflectance: 0.1,
                            double_sided: true,
                            cull_mode: None,
                            ..default()
                        }),
                        ..default()
                    });
                }
            });
    }

    info!("Spawned {} bodies", BODIES.len());
}

fn body_material(body: &BodyDescriptor, texture: Option<Handle<Image>>) -> StandardMaterial {
    let textured = texture.is_some();
    StandardMaterial {
        base_color: if textured {
            Color::WHITE
        } else {
            // Untextured fallback when the image file is missing.
            Color::srgb(0.5, 0.5, 0.5)
        },
        base_color_texture: texture,
        // The sun is self-luminous and must not be shaded by its own light.
        unlit: body.self_luminous,
        perceptual_roughness: 1.0,
        metallic: 0.0,
        reflectance: 0.1,
        ..default()
    }
}

/// Recomposes every body's transform from the current angle
/// accumulators. Pivots get orbit rotation + translation + tilt;
/// spheres get their spin rotation.
fn sync_body_transforms(
    system: Res<SolarSystem>,
    mut pivots: Query<(&BodyPivot, &mut Transform), Without<BodySphere>>,
    mut spheres: Query<(&BodySphere, &mut Transform), Without<BodyPivot>>,
) {
    for (pivot, mut transform) in pivots.iter_mut() {
        let body = &BODIES[pivot.0];
        *transform = body_pivot_transform(body, system.motions[pivot.0].orbit_degrees);
    }
    for (sphere, mut transform) in spheres.iter_mut() {
        let body = &BODIES[sphere.0];
        transform.rotation = body.spin_axis.rotation(system.motions[sphere.0].spin_degrees);
    }
}

/// Static gray guide circles in the orbital plane, one per planet.
/// Guides are decoration, not geometry, so they go through gizmos and
/// stay unlit.
fn draw_orbit_guides(mut gizmos: Gizmos) {
    for body in BODIES.iter().filter(|b| b.orbit_radius > 0.0) {
        let radius = body.orbit_radius;
        let points = (0..=ORBIT_GUIDE_SEGMENTS).map(move |i| {
            let angle = (i as f32 / ORBIT_GUIDE_SEGMENTS as f32) * std::f32::consts::TAU;
            Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
        });
        gizmos.linestrip(points, Color::srgb(0.3, 0.3, 0.3));
    }
}

/// Flat ring between two radii in the local X-Y plane, built as a
/// closed triangle strip (indexed as a triangle list).
pub fn annulus_mesh(inner_radius: f32, outer_radius: f32, segments: usize) -> Mesh {
    let mut positions = Vec::with_capacity((segments + 1) * 2);
    let mut normals = Vec::with_capacity((segments + 1) * 2);
    let mut uvs = Vec::with_capacity((segments + 1) * 2);
    let mut indices = Vec::with_capacity(segments * 6);

    for i in 0..=segments {
        let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
        let (sin, cos) = angle.sin_cos();
        positions.push([sin * inner_radius, cos * inner_radius, 0.0]);
        positions.push([sin * outer_radius, cos * outer_radius, 0.0]);
        normals.push([0.0, 0.0, 1.0]);
        normals.push([0.0, 0.0, 1.0]);
        let u = i as f32 / segments as f32;
        uvs.push([u, 0.0]);
        uvs.push([u, 1.0]);
    }

    for i in 0..segments as u32 {
        let base = i * 2;
        indices.extend_from_slice(&[base, base + 1, base + 2]);
        indices.extend_from_slice(&[base + 1, base + 3, base + 2]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    #[test]
    fn quarter_orbit_moves_body_to_negative_z() {
        let earth = &BODIES[3];
        let transform = body_pivot_transform(earth, 90.0);
        let expected = Vec3::new(0.0, 0.0, -earth.orbit_radius);
        assert!((transform.translation - expected).length() < 1e-4);
    }

    #[test]
    fn zero_orbit_keeps_body_on_primary_axis() {
        for body in &BODIES {
            let transform = body_pivot_transform(body, 0.0);
            assert!((transform.translation - Vec3::X * body.orbit_radius).length() < 1e-5);
        }
    }

    #[test]
    fn saturn_pivot_carries_its_tilt() {
        let saturn = &BODIES[6];
        let transform = body_pivot_transform(saturn, 0.0);
        let tilted_up = transform.rotation * Vec3::Y;
        let expected = Vec3::new(
            0.0,
            saturn.axial_tilt.to_radians().cos(),
            saturn.axial_tilt.to_radians().sin(),
        );
        assert!((tilted_up - expected).length() < 1e-4);
    }

    #[test]
    fn label_anchor_sits_above_the_body() {
        let mercury = &BODIES[1];
        let anchor = label_anchor(mercury, 0.0);
        let expected = Vec3::new(mercury.orbit_radius, mercury.label_offset, 0.0);
        assert!((anchor - expected).length() < 1e-5);
    }

    #[test]
    fn annulus_vertices_stay_between_radii() {
        let segments = 32;
        let mesh = annulus_mesh(1.2, 1.8, segments);
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("annulus mesh is missing positions");
        };
        assert_eq!(positions.len(), (segments + 1) * 2);
        for position in positions {
            let radius = Vec2::new(position[0], position[1]).length();
            assert!(radius > 1.2 - 1e-4 && radius < 1.8 + 1e-4);
            assert_eq!(position[2], 0.0);
        }
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("annulus mesh is missing indices");
        };
        assert_eq!(indices.len(), segments * 6);
    }
}
