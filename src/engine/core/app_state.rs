use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::engine::render::pass_group::PassTargets;

/// Frame driver states. `Loading` before the pipeline targets exist,
/// `Running` for the steady per-frame loop. The loop has no terminal state;
/// it only stops when the host tears down the surface.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

/// One-shot transition once pipeline initialisation has succeeded. The
/// catalog may still be in flight; the loop runs with an empty star set
/// until it resolves.
pub fn transition_to_running(
    targets: Option<Res<PassTargets>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if targets.is_some() {
        info!("→ Render pipeline initialised, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}
