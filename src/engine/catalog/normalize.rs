//! Catalog coordinate normalisation.
//!
//! Raw coordinates are divided by the single largest per-axis absolute
//! value across the whole catalog, preserving relative proportions between
//! axes, then scaled by [`WORLD_SCALE`] into scene units. Every normalised
//! component lands in [-1, 1] and the extremal star touches ±1 on at least
//! one axis.

use bevy::prelude::*;
use thiserror::Error;

use crate::constants::WORLD_SCALE;
use crate::engine::catalog::records::StarRecord;

/// Catalog ingestion failure. Surfaced to the caller that requested the
/// catalog; the scene stays starless rather than partially populated.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog source could not be retrieved: {0}")]
    Source(String),
    #[error("catalog document is malformed: {0}")]
    Parse(String),
    #[error("catalog contains no usable records, normalisation is undefined")]
    EmptyCatalog,
}

/// Rescale raw records into world positions.
///
/// Fails with [`CatalogError::EmptyCatalog`] when the record set is empty
/// or degenerate (all-zero coordinates), since a scale divisor cannot be
/// derived from either.
pub fn normalize_catalog(records: &[StarRecord]) -> Result<Vec<Vec3>, CatalogError> {
    if records.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    let mut max_abs = [0.0_f64; 3];
    for record in records {
        max_abs[0] = max_abs[0].max(record.x.abs());
        max_abs[1] = max_abs[1].max(record.y.abs());
        max_abs[2] = max_abs[2].max(record.z.abs());
    }

    let divisor = max_abs[0].max(max_abs[1]).max(max_abs[2]);
    if !(divisor > 0.0) || !divisor.is_finite() {
        return Err(CatalogError::EmptyCatalog);
    }

    Ok(records
        .iter()
        .map(|record| {
            Vec3::new(
                (record.x / divisor) as f32,
                (record.y / divisor) as f32,
                (record.z / divisor) as f32,
            ) * WORLD_SCALE
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(x: f64, y: f64, z: f64) -> StarRecord {
        StarRecord { x, y, z }
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(
            normalize_catalog(&[]),
            Err(CatalogError::EmptyCatalog)
        ));
    }

    #[test]
    fn all_zero_catalog_is_rejected() {
        let records = [record(0.0, 0.0, 0.0), record(0.0, 0.0, 0.0)];
        assert!(matches!(
            normalize_catalog(&records),
            Err(CatalogError::EmptyCatalog)
        ));
    }

    #[test]
    fn uses_single_largest_axis_extent_as_divisor() {
        let records = [
            record(10.0, 0.0, 0.0),
            record(0.0, 5.0, 0.0),
            record(0.0, 0.0, 20.0),
        ];
        let positions = normalize_catalog(&records).unwrap();
        assert_eq!(positions[0], Vec3::new(500.0, 0.0, 0.0));
        assert_eq!(positions[1], Vec3::new(0.0, 250.0, 0.0));
        assert_eq!(positions[2], Vec3::new(0.0, 0.0, 1000.0));
    }

    #[test]
    fn every_component_stays_inside_world_cube() {
        let records = [
            record(-80.0, 33.0, 12.0),
            record(7.0, -64.0, 5.5),
            record(41.0, 9.0, -2.25),
        ];
        let positions = normalize_catalog(&records).unwrap();
        let mut max_component: f32 = 0.0;
        for p in &positions {
            for c in p.abs().to_array() {
                assert!(c <= WORLD_SCALE);
                max_component = max_component.max(c);
            }
        }
        // The extremal record touches the cube boundary.
        assert_eq!(max_component, WORLD_SCALE);
    }

    #[test]
    fn invariant_under_uniform_rescale_of_the_source() {
        let records = [
            record(3.0, -1.5, 0.25),
            record(-0.5, 2.0, 1.0),
            record(1.0, 1.0, -4.0),
        ];
        let scaled: Vec<StarRecord> = records
            .iter()
            .map(|r| record(r.x * 750.0, r.y * 750.0, r.z * 750.0))
            .collect();

        let a = normalize_catalog(&records).unwrap();
        let b = normalize_catalog(&scaled).unwrap();
        for (p, q) in a.iter().zip(&b) {
            assert!((*p - *q).abs().max_element() < 1e-4);
        }
    }
}
