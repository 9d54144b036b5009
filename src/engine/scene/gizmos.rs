//! Overlay markers.
//!
//! A small axes gizmo at the origin on the overlay layer. Composited on top
//! of the final image and deliberately excluded from the bloom chain.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;

use crate::constants::WORLD_SCALE;
use crate::engine::render::layers::LayerTag;

#[derive(Component)]
pub struct AxesGizmo;

/// Spawn the origin axes marker: X red, Y green, Z blue.
pub fn spawn_axes_gizmo(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let length = WORLD_SCALE * 0.12;
    let axes = [
        (Vec3::X, Color::srgb(0.9, 0.25, 0.25)),
        (Vec3::Y, Color::srgb(0.25, 0.9, 0.25)),
        (Vec3::Z, Color::srgb(0.3, 0.45, 0.95)),
    ];

    for (direction, colour) in axes {
        let material = materials.add(StandardMaterial {
            base_color: colour,
            unlit: true,
            ..default()
        });
        commands.spawn((
            Mesh3d(meshes.add(line_mesh(Vec3::ZERO, direction * length))),
            MeshMaterial3d(material),
            Transform::default(),
            LayerTag::Overlay.render_layers(),
            AxesGizmo,
        ));
    }
}

fn line_mesh(from: Vec3, to: Vec3) -> Mesh {
    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default()).with_inserted_attribute(
        Mesh::ATTRIBUTE_POSITION,
        vec![from.to_array(), to.to_array()],
    )
}
