//! Final composite pass.
//!
//! A fullscreen quad samples the base, bloom-scene, glow, and overlay
//! targets at the same screen coordinate and blends them onto the window
//! surface. The bloom channel contributes twice: its raw render keeps star
//! cores sharp, and its thresholded/blurred glow brightens around them. The
//! camera driving the quad is the last in submission order, so every
//! channel has finished writing before the composite reads it.

use bevy::prelude::*;
use bevy::render::render_resource::{AsBindGroup, ShaderRef};
use bevy::sprite::Material2d;

use crate::constants::{BLOOM_STRENGTH, COMPOSITE_PASS_ORDER};
use crate::engine::render::bloom::spawn_fullscreen_pass;
use crate::engine::render::layers::COMPOSITE_PASS_LAYER;
use crate::engine::render::pass_group::PassTargets;

/// Four-channel blend material for the composite pass.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct CompositeMaterial {
    #[texture(0)]
    #[sampler(1)]
    pub base: Handle<Image>,

    /// Raw bloom-scene render; carries the sharp star cores.
    #[texture(2)]
    #[sampler(3)]
    pub bloom: Handle<Image>,

    /// Blurred bright-pass output; carries the soft glow.
    #[texture(4)]
    #[sampler(5)]
    pub glow: Handle<Image>,

    #[texture(6)]
    #[sampler(7)]
    pub overlay: Handle<Image>,

    /// x: bloom strength.
    #[uniform(8)]
    pub params: Vec4,
}

impl Material2d for CompositeMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/composite.wgsl".into()
    }
}

/// Blend applied per pixel by `composite.wgsl`: the bloom-scene render is
/// added at full strength (sharp cores), the blurred glow additively
/// brightens scaled by `bloom_strength`, then the overlay is
/// alpha-composited on top, unaffected by bloom.
pub fn composite_pixel(
    base: Vec3,
    bloom: Vec3,
    glow: Vec3,
    overlay: Vec4,
    bloom_strength: f32,
) -> Vec3 {
    let lit = base + bloom + glow * bloom_strength;
    lit.lerp(overlay.truncate(), overlay.w.clamp(0.0, 1.0))
}

/// Spawn the composite quad and the window camera that renders it.
///
/// Returns the camera entity so UI can attach to the visible surface.
pub fn setup_compositor(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<CompositeMaterial>,
    targets: &PassTargets,
) -> Entity {
    spawn_fullscreen_pass(
        commands,
        meshes,
        materials,
        CompositeMaterial {
            base: targets.base_scene.clone(),
            bloom: targets.bloom_scene.clone(),
            glow: targets.blur_pong.clone(),
            overlay: targets.overlay_scene.clone(),
            params: Vec4::new(BLOOM_STRENGTH, 0.0, 0.0, 0.0),
        },
        COMPOSITE_PASS_LAYER,
        COMPOSITE_PASS_ORDER,
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_bloom_channels_leave_base_unchanged() {
        let base = Vec3::new(0.2, 0.5, 0.8);
        let out = composite_pixel(base, Vec3::ZERO, Vec3::ZERO, Vec4::ZERO, 1.5);
        assert_eq!(out, base);
    }

    #[test]
    fn star_cores_reach_the_framebuffer_unblurred() {
        // A pixel lit only in the bloom-scene render must survive at full
        // strength even when the blurred glow is empty.
        let core = Vec3::new(1.0, 0.9, 0.8);
        let out = composite_pixel(Vec3::ZERO, core, Vec3::ZERO, Vec4::ZERO, 1.5);
        assert_eq!(out, core);
    }

    #[test]
    fn glow_contribution_is_additive_and_scaled() {
        let base = Vec3::splat(0.1);
        let glow = Vec3::splat(0.2);
        let out = composite_pixel(base, Vec3::ZERO, glow, Vec4::ZERO, 2.0);
        assert!((out - Vec3::splat(0.5)).abs().max_element() < 1e-6);
    }

    #[test]
    fn opaque_overlay_wins_over_bloomed_base() {
        let overlay = Vec4::new(1.0, 0.0, 0.0, 1.0);
        let out = composite_pixel(Vec3::splat(0.3), Vec3::splat(2.0), Vec3::splat(9.0), overlay, 1.0);
        assert_eq!(out, Vec3::new(1.0, 0.0, 0.0));
    }
}
