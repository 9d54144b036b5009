//! Galaxy render engine modules.
//!
//! Implements catalog ingestion, the star scene, and the layered
//! multi-pass render pipeline that composites bloom onto the star field.

/// Orbit camera rig and per-frame pass-camera synchronisation.
pub mod camera;

/// Star catalog asset type, coordinate normalisation, and loader systems.
pub mod catalog;

/// Application construction and the loading/running state machine.
pub mod core;

/// Layer tags, offscreen pass groups, bloom chain, and the compositor.
pub mod render;

/// Star entities, distance-adaptive scaling, and helper geometry.
pub mod scene;
