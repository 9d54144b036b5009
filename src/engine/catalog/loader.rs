//! Catalog loading systems.
//!
//! The fetch is a single one-shot asset load started at startup. The render
//! loop ticks freely while the document is in flight; a poll system checks
//! the load state each frame and swaps the finished star set into the scene
//! in one frame. No retry: a failed fetch leaves the star field empty with
//! only the helper geometry visible.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::constants::CATALOG_PATH;
use crate::engine::catalog::normalize::{CatalogError, normalize_catalog};
use crate::engine::catalog::records::StarCatalog;
use crate::engine::scene::star::spawn_stars;

/// Tracks the in-flight catalog load. `resolved` latches after the first
/// terminal state so the poll system becomes a no-op.
#[derive(Resource, Default)]
pub struct CatalogLoader {
    handle: Option<Handle<StarCatalog>>,
    resolved: bool,
}

/// Kick off the one-shot catalog fetch.
pub fn start_catalog_load(mut loader: ResMut<CatalogLoader>, asset_server: Res<AssetServer>) {
    info!("Loading star catalog from: {CATALOG_PATH}");
    loader.handle = Some(asset_server.load(CATALOG_PATH));
}

/// Poll the in-flight load and populate the scene once it resolves.
///
/// Ingestion is all-or-nothing: normalisation runs over the full record set
/// before any star is spawned, so a failure can never leave a partially
/// populated scene.
pub fn poll_catalog(
    mut loader: ResMut<CatalogLoader>,
    asset_server: Res<AssetServer>,
    catalogs: Res<Assets<StarCatalog>>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if loader.resolved {
        return;
    }
    let Some(handle) = loader.handle.clone() else {
        return;
    };

    match asset_server.get_load_state(&handle) {
        Some(LoadState::Loaded) => {
            let Some(catalog) = catalogs.get(&handle) else {
                return;
            };
            loader.resolved = true;

            match normalize_catalog(&catalog.records) {
                Ok(positions) => {
                    info!("✓ Catalog resolved with {} stars", positions.len());
                    spawn_stars(&mut commands, &mut meshes, &mut materials, &positions);
                }
                Err(err) => error!("catalog ingestion failed: {err}"),
            }
        }
        Some(LoadState::Failed(reason)) => {
            loader.resolved = true;
            let err = classify_load_failure(&reason.to_string());
            error!("catalog ingestion failed: {err}");
        }
        _ => {}
    }
}

/// Split terminal load failures into the ingestion error taxonomy. Only a
/// failure reported from inside a running loader ("... with asset loader
/// ...") means the bytes arrived but did not deserialise; everything else,
/// including a missing loader registration, is a source-side failure.
fn classify_load_failure(reason: &str) -> CatalogError {
    if reason.contains("with asset loader") {
        CatalogError::Parse(reason.to_owned())
    } else {
        CatalogError::Source(reason.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_failures_classify_as_parse_errors() {
        let err = classify_load_failure(
            "Failed to load asset 'catalogs/exo.json' with asset loader \
             'bevy_common_assets::json::JsonAssetLoader': expected value at line 1 column 1",
        );
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn reader_failures_classify_as_source_errors() {
        let err = classify_load_failure("path not found: catalogs/exo.json");
        assert!(matches!(err, CatalogError::Source(_)));
    }

    #[test]
    fn missing_loader_registration_classifies_as_source_error() {
        let err = classify_load_failure(
            "no `AssetLoader` found for the following extension: json",
        );
        assert!(matches!(err, CatalogError::Source(_)));
    }
}
