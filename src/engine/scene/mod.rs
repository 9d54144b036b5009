//! Scene content.
//!
//! Star entities with distance-adaptive scaling, plus the helper geometry
//! that stays visible even when the catalog fails to load.

/// Axes marker rendered on the overlay channel.
pub mod gizmos;

/// Reference grid rendered on the base channel.
pub mod grid;

/// Star entity, spawning, and per-frame scale compensation.
pub mod star;
