//! Camera rig for scene navigation.
//!
//! One orbit rig resource drives all three scene pass cameras, so every
//! channel of the composite sees the identical view each frame.

/// Orbit rig resource, controller system, and pass-camera synchronisation.
pub mod orbit_camera;
