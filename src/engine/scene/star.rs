//! Star entities.
//!
//! Each catalog record becomes one emissive sphere on the bloom layer. The
//! world position is fixed at spawn; the only per-frame mutation is the
//! rendered scale, compensated for camera distance so stars stay visible up
//! close and at galactic range without covering the frame.

use bevy::prelude::*;

use crate::constants::{STAR_BASE_SIZE, STAR_MAX_SCALE, STAR_MIN_SCALE, STAR_SCALE_DISTANCE};
use crate::engine::render::layers::LayerTag;
use crate::engine::render::pass_group::ScenePassCamera;

/// A renderable star. Exclusively owned by the scene graph.
#[derive(Component)]
pub struct Star {
    /// Base visual size multiplying the distance-compensated scale.
    pub base_size: f32,
}

/// Distance-compensated rendered scale.
///
/// Monotonic non-decreasing in distance until the upper clamp, bounded on
/// both sides, and total: degenerate distances (zero, non-finite) still
/// produce an in-range scale.
pub fn apparent_scale(distance: f32) -> f32 {
    if !distance.is_finite() {
        return STAR_MAX_SCALE;
    }
    (distance / STAR_SCALE_DISTANCE).clamp(STAR_MIN_SCALE, STAR_MAX_SCALE)
}

/// Spawn one star per normalised world position, all sharing a single
/// sphere mesh and emissive material.
pub fn spawn_stars(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    positions: &[Vec3],
) {
    let mesh = meshes.add(Sphere::new(0.5));
    // Well above the bright-pass threshold so every star feeds the glow.
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::rgb(4.0, 3.6, 3.0),
        ..default()
    });

    for &position in positions {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position)
                .with_scale(Vec3::splat(STAR_MIN_SCALE * STAR_BASE_SIZE)),
            LayerTag::Bloom.render_layers(),
            Star {
                base_size: STAR_BASE_SIZE,
            },
        ));
    }
}

/// Recompute every star's rendered scale once per frame, measured from the
/// pose a pass camera actually renders with this tick (the damped
/// transform, not the rig's undamped target). Translation is never written
/// here.
pub fn update_star_scales(
    cameras: Query<&Transform, (With<ScenePassCamera>, Without<Star>)>,
    mut stars: Query<(&Star, &mut Transform)>,
) {
    // All pass cameras share one pose; any of them is the eye.
    let Some(eye) = cameras.iter().next().map(|t| t.translation) else {
        return;
    };
    for (star, mut transform) in &mut stars {
        let distance = transform.translation.distance(eye);
        transform.scale = Vec3::splat(apparent_scale(distance) * star.base_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WORLD_SCALE;

    #[test]
    fn scale_is_clamped_at_both_ends() {
        assert_eq!(apparent_scale(0.0), STAR_MIN_SCALE);
        assert_eq!(apparent_scale(WORLD_SCALE * 1_000.0), STAR_MAX_SCALE);
    }

    #[test]
    fn scale_is_monotonic_up_to_the_upper_clamp() {
        let mut previous = apparent_scale(0.0);
        let mut d = 0.0;
        while d <= STAR_SCALE_DISTANCE * STAR_MAX_SCALE * 2.0 {
            let s = apparent_scale(d);
            assert!(s >= previous, "scale regressed at distance {d}");
            assert!((STAR_MIN_SCALE..=STAR_MAX_SCALE).contains(&s));
            previous = s;
            d += 7.3;
        }
    }

    #[test]
    fn scales_measure_against_the_pass_camera_pose() {
        use bevy::ecs::system::RunSystemOnce;

        let mut world = World::new();
        // Camera mid-dolly: its damped pose is what the star must scale
        // against, regardless of where the rig target sits.
        world.spawn((ScenePassCamera, Transform::from_xyz(0.0, 0.0, 0.0)));
        let star = world
            .spawn((
                Star { base_size: 1.0 },
                Transform::from_xyz(STAR_SCALE_DISTANCE * 2.0, 0.0, 0.0),
            ))
            .id();

        world.run_system_once(update_star_scales).unwrap();

        let scale = world.get::<Transform>(star).unwrap().scale;
        assert!((scale.x - 2.0).abs() < 1e-5, "scale was {scale:?}");
    }

    #[test]
    fn degenerate_distances_stay_in_range() {
        for d in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -5.0] {
            let s = apparent_scale(d);
            assert!((STAR_MIN_SCALE..=STAR_MAX_SCALE).contains(&s), "{d} -> {s}");
        }
    }
}
