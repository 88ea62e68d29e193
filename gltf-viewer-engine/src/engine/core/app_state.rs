use bevy::prelude::*;

use crate::engine::camera::motion::{CameraMotionController, MotionCompleted, MotionKind};
use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    EntryFlight,
    Running,
}

#[derive(Component)]
pub struct FpsText;

// Transition to EntryFlight once the model scene is in the world
pub fn transition_to_entry_flight(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.model_spawned {
        println!("→ Transitioning to EntryFlight state");
        next_state.set(AppState::EntryFlight);
    }
}

/// Kick off the orbital entry flight when the state is entered.
pub fn begin_entry_flight(time: Res<Time>, mut controller: ResMut<CameraMotionController>) {
    controller.play_entry(time.elapsed_secs());
    info!("Entry flight started");
}

// Final transition to running state, once the entry flight has landed
pub fn transition_to_running(
    mut completed: EventReader<MotionCompleted>,
    mut next_state: ResMut<NextState<AppState>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in completed.read() {
        if matches!(event.kind, MotionKind::EntryOrbit) {
            println!("→ Entry flight complete, transitioning to Running state");
            next_state.set(AppState::Running);
            rpc_interface.send_notification("entry_complete", serde_json::json!({}));
        }
    }
}

/// Push loading progress changes to the frontend.
pub fn update_loading_frontend(
    loading_progress: Res<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !loading_progress.is_changed() {
        return;
    }

    rpc_interface.send_notification(
        "load_state",
        serde_json::json!({
            "manifest_resolved": loading_progress.manifest_resolved,
            "model_loaded": loading_progress.model_loaded,
            "model_spawned": loading_progress.model_spawned,
        }),
    );
}
