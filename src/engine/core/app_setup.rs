//! Application construction.
//!
//! Wires the catalog asset pipeline, the three scene passes with their
//! post-process chains, the compositor, and the per-tick system order:
//! camera controller → pass-camera sync → star scaling, with catalog
//! polling and target resizing alongside.

use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::sprite::Material2dPlugin;
use bevy::ui::UiTargetCamera;
use bevy::window::{PresentMode, PrimaryWindow};
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::camera::orbit_camera::{OrbitRig, camera_controller, sync_pass_cameras};
use crate::engine::catalog::loader::{CatalogLoader, poll_catalog, start_catalog_load};
use crate::engine::catalog::records::StarCatalog;
use crate::engine::core::app_state::{
    AppState, FpsText, fps_text_update_system, transition_to_running,
};
use crate::engine::render::bloom::{BlurMaterial, BrightPassMaterial, setup_bloom_chain};
use crate::engine::render::compositor::{CompositeMaterial, setup_compositor};
use crate::engine::render::pass_group::{PassTargets, resize_pass_targets, spawn_pass_cameras};
use crate::engine::scene::gizmos::spawn_axes_gizmo;
use crate::engine::scene::grid::spawn_reference_grid;
use crate::engine::scene::star::update_star_scales;

/// Create the application with the full layered render pipeline.
pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers StarCatalog as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<StarCatalog>::new(&["json"]))
        .add_plugins(Material2dPlugin::<BrightPassMaterial>::default())
        .add_plugins(Material2dPlugin::<BlurMaterial>::default())
        .add_plugins(Material2dPlugin::<CompositeMaterial>::default())
        .init_state::<AppState>()
        .init_resource::<OrbitRig>()
        .init_resource::<CatalogLoader>()
        .add_systems(Startup, (setup_render_pipeline, start_catalog_load))
        .add_systems(
            Update,
            (
                transition_to_running.run_if(in_state(AppState::Loading)),
                poll_catalog,
                resize_pass_targets,
                fps_text_update_system,
            ),
        )
        .add_systems(
            Update,
            (camera_controller, sync_pass_cameras, update_star_scales)
                .chain()
                .run_if(in_state(AppState::Running)),
        );

    app
}

/// Allocate the offscreen targets and spawn the whole render graph scene
/// side: pass cameras, bloom chain, compositor, helper geometry, UI.
///
/// Target allocation failure is fatal to the pipeline; it is logged and the
/// app stays in `Loading` with nothing to present.
fn setup_render_pipeline(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut images: ResMut<Assets<Image>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut std_materials: ResMut<Assets<StandardMaterial>>,
    mut bright_materials: ResMut<Assets<BrightPassMaterial>>,
    mut blur_materials: ResMut<Assets<BlurMaterial>>,
    mut composite_materials: ResMut<Assets<CompositeMaterial>>,
) {
    let Ok(window) = windows.single() else {
        error!("render pipeline initialisation failed: no primary window");
        return;
    };

    let targets = match PassTargets::allocate(
        &mut images,
        window.physical_width(),
        window.physical_height(),
    ) {
        Ok(targets) => targets,
        Err(err) => {
            error!("render pipeline initialisation failed: {err}");
            return;
        }
    };

    spawn_pass_cameras(&mut commands, &targets);
    setup_bloom_chain(
        &mut commands,
        &mut meshes,
        &mut bright_materials,
        &mut blur_materials,
        &targets,
    );
    let compositor_camera = setup_compositor(
        &mut commands,
        &mut meshes,
        &mut composite_materials,
        &targets,
    );

    spawn_reference_grid(&mut commands, &mut meshes, &mut std_materials);
    spawn_axes_gizmo(&mut commands, &mut meshes, &mut std_materials);
    spawn_fps_overlay(&mut commands, compositor_camera);

    commands.insert_resource(targets);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Galaxy Render Engine".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

/// FPS readout attached to the window camera, above the composited image.
fn spawn_fps_overlay(commands: &mut Commands, camera: Entity) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            UiTargetCamera(camera),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 1.0)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}
