//! Bloom post-process chain.
//!
//! The bloom channel runs through a soft luminance threshold followed by a
//! separable two-pass Gaussian blur. Each stage is a fullscreen quad on its
//! own isolation layer, driven by its own 2D camera rendering into the next
//! intermediate target, so the chain executes strictly in camera order.

use bevy::prelude::*;
use bevy::render::camera::{RenderTarget, ScalingMode};
use bevy::render::render_resource::{AsBindGroup, ShaderRef};
use bevy::render::view::RenderLayers;
use bevy::sprite::Material2d;

use crate::constants::{
    BLOOM_RADIUS, BLOOM_SOFT_KNEE, BLOOM_THRESHOLD, BLUR_H_PASS_ORDER, BLUR_V_PASS_ORDER,
    BRIGHT_PASS_ORDER,
};
use crate::engine::render::layers::{BLUR_H_PASS_LAYER, BLUR_V_PASS_LAYER, BRIGHT_PASS_LAYER};
use crate::engine::render::pass_group::PassTargets;

/// Soft luminance threshold extracting glow sources from the bloom channel.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct BrightPassMaterial {
    #[texture(0)]
    #[sampler(1)]
    pub source: Handle<Image>,

    /// x: luminance threshold, y: soft knee width.
    #[uniform(2)]
    pub params: Vec4,
}

impl Material2d for BrightPassMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/bright_pass.wgsl".into()
    }
}

/// One direction of the separable 9-tap Gaussian blur.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct BlurMaterial {
    #[texture(0)]
    #[sampler(1)]
    pub source: Handle<Image>,

    /// xy: blur direction in texel steps, z: radius multiplier.
    #[uniform(2)]
    pub params: Vec4,
}

impl Material2d for BlurMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/blur.wgsl".into()
    }
}

/// Spawn a fullscreen quad plus the 2D camera that renders it, isolated on
/// the given layer. `target` of `None` renders to the window surface.
pub fn spawn_fullscreen_pass<M: Material2d>(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<M>,
    material: M,
    layer: usize,
    order: isize,
    target: Option<Handle<Image>>,
) -> Entity {
    let layers = RenderLayers::layer(layer);

    commands.spawn((
        Mesh2d(meshes.add(Rectangle::new(1.0, 1.0))),
        MeshMaterial2d(materials.add(material)),
        Transform::default(),
        layers.clone(),
    ));

    let mut camera = Camera {
        order,
        hdr: true,
        clear_color: ClearColorConfig::Custom(Color::NONE),
        ..default()
    };
    if let Some(image) = target {
        camera.target = RenderTarget::Image(image.into());
    }

    commands
        .spawn((
            Camera2d,
            camera,
            // Fixed 1x1 world units so the unit quad fills the view at any
            // target resolution; resize never touches these passes.
            Projection::from(OrthographicProjection {
                scaling_mode: ScalingMode::Fixed {
                    width: 1.0,
                    height: 1.0,
                },
                ..OrthographicProjection::default_2d()
            }),
            Msaa::Off,
            layers,
        ))
        .id()
}

/// Build the bloom chain: bright-pass extraction, horizontal blur, vertical
/// blur. The vertical blur writes the finished glow texture the compositor
/// reads.
pub fn setup_bloom_chain(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    bright_materials: &mut Assets<BrightPassMaterial>,
    blur_materials: &mut Assets<BlurMaterial>,
    targets: &PassTargets,
) {
    spawn_fullscreen_pass(
        commands,
        meshes,
        bright_materials,
        BrightPassMaterial {
            source: targets.bloom_scene.clone(),
            params: Vec4::new(BLOOM_THRESHOLD, BLOOM_SOFT_KNEE, 0.0, 0.0),
        },
        BRIGHT_PASS_LAYER,
        BRIGHT_PASS_ORDER,
        Some(targets.bright.clone()),
    );

    spawn_fullscreen_pass(
        commands,
        meshes,
        blur_materials,
        BlurMaterial {
            source: targets.bright.clone(),
            params: Vec4::new(1.0, 0.0, BLOOM_RADIUS, 0.0),
        },
        BLUR_H_PASS_LAYER,
        BLUR_H_PASS_ORDER,
        Some(targets.blur_ping.clone()),
    );

    spawn_fullscreen_pass(
        commands,
        meshes,
        blur_materials,
        BlurMaterial {
            source: targets.blur_ping.clone(),
            params: Vec4::new(0.0, 1.0, BLOOM_RADIUS, 0.0),
        },
        BLUR_V_PASS_LAYER,
        BLUR_V_PASS_ORDER,
        Some(targets.blur_pong.clone()),
    );
}
