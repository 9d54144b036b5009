//! Orbit camera rig.
//!
//! Map-style controls: left-drag orbits around the focus point, the wheel
//! dollies along the view direction with distance-proportional speed, and
//! WASD pans the focus across the galactic plane. The rig is the single
//! writer of camera state; pass cameras only ever read it.

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::constants::{CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE};
use crate::engine::render::pass_group::ScenePassCamera;

const PITCH_LIMIT: f32 = 1.55;
const YAW_SENSITIVITY: f32 = 0.0035;
const PITCH_SENSITIVITY: f32 = 0.0030;

/// Shared orbit state consumed by every scene pass camera.
#[derive(Resource)]
pub struct OrbitRig {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            yaw: 0.0,
            pitch: -0.6,
            distance: 70.0,
        }
    }
}

impl OrbitRig {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Eye position derived from focus, orientation, and dolly distance.
    pub fn position(&self) -> Vec3 {
        self.focus + self.rotation() * Vec3::Z * self.distance
    }
}

/// Advance the rig from this tick's input.
pub fn camera_controller(
    mut rig: ResMut<OrbitRig>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        rig.yaw -= mouse_delta.x * YAW_SENSITIVITY;
        rig.pitch = (rig.pitch - mouse_delta.y * PITCH_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        // Multiplicative dolly keeps zoom speed proportional to distance.
        rig.distance = (rig.distance * (1.0 - scroll_accum * 0.1))
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    let mut pan_input = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        pan_input.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        pan_input.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        pan_input.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        pan_input.x -= 1.0;
    }

    if pan_input != Vec3::ZERO {
        let yaw_only = Quat::from_rotation_y(rig.yaw);
        let world_delta = yaw_only * pan_input;
        let speed = (rig.distance * 0.5).clamp(2.0, 2_000.0);
        rig.focus += world_delta.normalize() * speed * time.delta_secs();
    }
}

/// Copy the rig pose onto every scene pass camera with a damping lerp, once
/// per tick, after the controller has run.
pub fn sync_pass_cameras(
    rig: Res<OrbitRig>,
    time: Res<Time>,
    mut cameras: Query<&mut Transform, With<ScenePassCamera>>,
) {
    let target_pos = rig.position();
    let target_rot = rig.rotation();
    let lerp = (12.0 * time.delta_secs()).min(1.0);

    for mut transform in &mut cameras {
        transform.translation = transform.translation.lerp(target_pos, lerp);
        transform.rotation = transform.rotation.slerp(target_rot, lerp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_sits_at_dolly_distance_from_focus() {
        let rig = OrbitRig {
            focus: Vec3::new(10.0, -4.0, 2.0),
            yaw: 0.8,
            pitch: -0.4,
            distance: 123.0,
        };
        let d = rig.position().distance(rig.focus);
        assert!((d - 123.0).abs() < 1e-3);
    }

    #[test]
    fn default_rig_looks_toward_its_focus() {
        let rig = OrbitRig::default();
        let view_dir = rig.rotation() * -Vec3::Z;
        let to_focus = (rig.focus - rig.position()).normalize();
        assert!((view_dir - to_focus).length() < 1e-5);
    }
}
