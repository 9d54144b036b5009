//! Application core.
//!
//! Builds the Bevy app, wires the per-tick system order, and owns the
//! loading/running state machine.

/// App construction, plugin wiring, and startup/setup systems.
pub mod app_setup;

/// App state machine and FPS overlay.
pub mod app_state;
