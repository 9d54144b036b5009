//! Reference grid.
//!
//! A flat line grid on the galactic plane, spanning the world cube. Lives
//! on the base layer so it never feeds the bloom chain, and stays visible
//! as orientation fallback when catalog ingestion fails.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;

use crate::constants::WORLD_SCALE;
use crate::engine::render::layers::LayerTag;

#[derive(Component)]
pub struct ReferenceGrid;

const GRID_CELLS_PER_SIDE: u32 = 20;

/// Spawn the base-layer reference grid centred on the origin.
pub fn spawn_reference_grid(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.12),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(create_grid_mesh(WORLD_SCALE, GRID_CELLS_PER_SIDE))),
        MeshMaterial3d(material),
        Transform::default(),
        LayerTag::Base.render_layers(),
        NoFrustumCulling,
        ReferenceGrid,
    ));
}

/// Build a line-list mesh of evenly spaced grid lines on the XZ plane.
fn create_grid_mesh(half_extent: f32, cells_per_side: u32) -> Mesh {
    let spacing = (half_extent * 2.0) / cells_per_side as f32;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(4 * (cells_per_side as usize + 1));

    for i in 0..=cells_per_side {
        let offset = -half_extent + i as f32 * spacing;
        // Line running along Z at fixed X.
        positions.push([offset, 0.0, -half_extent]);
        positions.push([offset, 0.0, half_extent]);
        // Line running along X at fixed Z.
        positions.push([-half_extent, 0.0, offset]);
        positions.push([half_extent, 0.0, offset]);
    }

    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_mesh_has_two_endpoints_per_line() {
        let mesh = create_grid_mesh(100.0, 4);
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|a| a.as_float3())
            .expect("position attribute");
        // 5 lines per direction, 2 directions, 2 endpoints each.
        assert_eq!(positions.len(), 20);
        for p in positions {
            assert!(p[0].abs() <= 100.0 && p[2].abs() <= 100.0);
            assert_eq!(p[1], 0.0);
        }
    }
}
