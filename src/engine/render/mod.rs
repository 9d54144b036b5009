//! Layered multi-pass rendering.
//!
//! Three isolated scene passes (bloom sources, overlay, base) render into
//! offscreen targets, the bloom target runs through a threshold/blur chain,
//! and a final fullscreen pass composites the channels onto the window.

/// Bright-pass extraction and separable Gaussian blur materials.
pub mod bloom;

/// Final fullscreen blend of the base, bloom, and overlay channels.
pub mod compositor;

/// Render layer tags partitioning the scene into disjoint visibility groups.
pub mod layers;

/// Offscreen target allocation, scene pass cameras, and resize handling.
pub mod pass_group;
