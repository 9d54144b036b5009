//! Star catalog ingestion.
//!
//! Loads a JSON catalog of raw star coordinates as a Bevy asset, rescales
//! the records into the bounded world cube, and spawns one star entity per
//! record once the document resolves. Ingestion is all-or-nothing: any
//! failure leaves the scene in a valid starless state.

/// Asset-server driven loading systems and error surfacing.
pub mod loader;

/// Coordinate normalisation into the world cube.
pub mod normalize;

/// Raw catalog record and asset types.
pub mod records;
