//! Offscreen pass groups.
//!
//! Allocates one offscreen colour target per channel plus the intermediate
//! bloom-chain targets, spawns the three scene pass cameras, and keeps every
//! target sized to the primary window. Each scene camera is an independent,
//! immutable view configuration (projection + layer mask); nothing mutates a
//! shared camera between passes, so pass order is fixed purely by camera
//! submission order.

use bevy::asset::RenderAssetUsages;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy::render::camera::RenderTarget;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat, TextureUsages};
use bevy::window::{PrimaryWindow, WindowResized};
use thiserror::Error;

use crate::constants::{
    BASE_SCENE_PASS_ORDER, BLOOM_SCENE_PASS_ORDER, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR,
    FOG_COLOR, FOG_DENSITY, OVERLAY_SCENE_PASS_ORDER,
};
use crate::engine::render::layers::LayerTag;

/// Offscreen target or pipeline resource allocation failure. Fatal to the
/// pipeline; there is no degraded-mode fallback.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cannot allocate offscreen target `{label}` with degenerate extent {width}x{height}")]
    DegenerateTarget {
        label: &'static str,
        width: u32,
        height: u32,
    },
}

/// Handles to every offscreen colour target the pipeline renders through.
///
/// Scene targets are written by exactly one pass camera and read only by
/// stages that run strictly later in camera order (the next chain stage or
/// the compositor).
#[derive(Resource, Clone)]
pub struct PassTargets {
    /// Raw bloom-source channel (stars only). Feeds the bright pass and
    /// carries the sharp star cores into the composite.
    pub bloom_scene: Handle<Image>,
    /// Bright-pass extraction of the bloom channel.
    pub bright: Handle<Image>,
    /// Horizontal blur of the bright pass.
    pub blur_ping: Handle<Image>,
    /// Vertical blur; the finished glow texture read by the compositor.
    pub blur_pong: Handle<Image>,
    /// Overlay channel (markers, untouched by bloom).
    pub overlay_scene: Handle<Image>,
    /// Base channel (reference geometry).
    pub base_scene: Handle<Image>,
}

impl PassTargets {
    /// Allocate the full target set at the given pixel dimensions.
    pub fn allocate(
        images: &mut Assets<Image>,
        width: u32,
        height: u32,
    ) -> Result<Self, PipelineError> {
        Ok(Self {
            bloom_scene: create_offscreen_target(images, width, height, "bloom_scene_target")?,
            bright: create_offscreen_target(images, width, height, "bright_pass_target")?,
            blur_ping: create_offscreen_target(images, width, height, "blur_ping_target")?,
            blur_pong: create_offscreen_target(images, width, height, "blur_pong_target")?,
            overlay_scene: create_offscreen_target(images, width, height, "overlay_scene_target")?,
            base_scene: create_offscreen_target(images, width, height, "base_scene_target")?,
        })
    }

    fn all(&self) -> [&Handle<Image>; 6] {
        [
            &self.bloom_scene,
            &self.bright,
            &self.blur_ping,
            &self.blur_pong,
            &self.overlay_scene,
            &self.base_scene,
        ]
    }
}

/// Marker for the three scene pass cameras whose transforms follow the
/// orbit rig every frame.
#[derive(Component)]
pub struct ScenePassCamera;

/// Create a window-sized HDR colour target usable as both render attachment
/// and shader input.
fn create_offscreen_target(
    images: &mut Assets<Image>,
    width: u32,
    height: u32,
    label: &'static str,
) -> Result<Handle<Image>, PipelineError> {
    if width == 0 || height == 0 {
        return Err(PipelineError::DegenerateTarget {
            label,
            width,
            height,
        });
    }

    let size = Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let mut image = Image::new_fill(
        size,
        TextureDimension::D2,
        &[0u8; 8],
        TextureFormat::Rgba16Float,
        RenderAssetUsages::default(),
    );
    image.texture_descriptor.label = Some(label);
    image.texture_descriptor.usage = TextureUsages::TEXTURE_BINDING
        | TextureUsages::COPY_DST
        | TextureUsages::RENDER_ATTACHMENT;

    Ok(images.add(image))
}

/// Shared perspective projection for all three scene passes.
fn scene_projection() -> Projection {
    Projection::from(PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(),
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        ..default()
    })
}

/// Spawn the bloom, overlay, and base scene pass cameras.
///
/// Each renders the shared scene restricted to its own layer tag into its
/// own offscreen target. The base pass additionally carries the scene fog
/// and filmic tonemapping; the bloom chain expects raw HDR input.
pub fn spawn_pass_cameras(commands: &mut Commands, targets: &PassTargets) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            order: BLOOM_SCENE_PASS_ORDER,
            target: RenderTarget::Image(targets.bloom_scene.clone().into()),
            hdr: true,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        scene_projection(),
        Msaa::Off,
        Tonemapping::None,
        Transform::default(),
        LayerTag::Bloom.render_layers(),
        ScenePassCamera,
    ));

    commands.spawn((
        Camera3d::default(),
        Camera {
            order: OVERLAY_SCENE_PASS_ORDER,
            target: RenderTarget::Image(targets.overlay_scene.clone().into()),
            hdr: true,
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        scene_projection(),
        Msaa::Off,
        Tonemapping::None,
        Transform::default(),
        LayerTag::Overlay.render_layers(),
        ScenePassCamera,
    ));

    commands.spawn((
        Camera3d::default(),
        Camera {
            order: BASE_SCENE_PASS_ORDER,
            target: RenderTarget::Image(targets.base_scene.clone().into()),
            hdr: true,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        scene_projection(),
        Msaa::Off,
        Tonemapping::AcesFitted,
        DistanceFog {
            color: Color::srgb(FOG_COLOR[0], FOG_COLOR[1], FOG_COLOR[2]),
            falloff: FogFalloff::Exponential {
                density: FOG_DENSITY,
            },
            ..default()
        },
        Transform::default(),
        LayerTag::Base.render_layers(),
        ScenePassCamera,
    ));
}

/// Resize every offscreen target when the window surface changes, once per
/// tick. Camera aspect ratios follow their targets automatically.
pub fn resize_pass_targets(
    mut resize_events: EventReader<WindowResized>,
    windows: Query<&Window, With<PrimaryWindow>>,
    targets: Option<Res<PassTargets>>,
    mut images: ResMut<Assets<Image>>,
) {
    if resize_events.read().last().is_none() {
        return;
    }
    let (Some(targets), Ok(window)) = (targets, windows.single()) else {
        return;
    };

    let width = window.physical_width();
    let height = window.physical_height();
    if width == 0 || height == 0 {
        // Minimised surface; keep the previous targets until it comes back.
        return;
    }

    let size = Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    for handle in targets.all() {
        if let Some(image) = images.get_mut(handle) {
            image.resize(size);
        }
    }
}
