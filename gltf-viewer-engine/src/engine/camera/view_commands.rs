use bevy::prelude::*;

use constants::views::ViewKey;

use crate::engine::camera::motion::{
    CameraMotionController, MotionCompleted, MotionKind, ViewerCamera,
};
use crate::rpc::web_rpc::WebRpcInterface;

/// Source of a view request for logging and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewRequestSource {
    Ui,
    Keyboard,
    Rpc,
}

/// Event fired when a view change is requested via button, keyboard or RPC.
#[derive(Event)]
pub struct ViewRequestEvent {
    pub key: ViewKey,
    pub source: ViewRequestSource,
}

/// Resource tracking which preset the camera is on or moving towards.
#[derive(Resource)]
pub struct CurrentView(pub ViewKey);

impl Default for CurrentView {
    fn default() -> Self {
        Self(ViewKey::Default)
    }
}

/// Accept or silently drop queued view requests against the motion slot.
///
/// Accepted requests capture the camera's current position as the transition
/// start and update the current view immediately, before the motion lands.
pub fn handle_view_requests(
    mut events: EventReader<ViewRequestEvent>,
    mut controller: ResMut<CameraMotionController>,
    mut current_view: ResMut<CurrentView>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    time: Res<Time>,
    camera: Query<&Transform, With<ViewerCamera>>,
) {
    for event in events.read() {
        let Ok(transform) = camera.single() else {
            continue;
        };

        let accepted = controller.begin_view_transition(
            event.key,
            transform.translation,
            time.elapsed_secs(),
        );

        if !accepted {
            continue;
        }

        current_view.0 = event.key;
        info!(
            "View transition to '{}' via {:?}",
            event.key.to_string(),
            event.source
        );

        rpc_interface.send_notification(
            "view_changed",
            serde_json::json!({
                "view": event.key.to_string(),
                "transitioning": true
            }),
        );
    }
}

/// Notify the frontend when a view transition lands.
pub fn notify_view_transition_complete(
    mut completed: EventReader<MotionCompleted>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in completed.read() {
        if let MotionKind::ViewTransition(key) = event.kind {
            rpc_interface.send_notification(
                "view_transition_complete",
                serde_json::json!({ "view": key.to_string() }),
            );
        }
    }
}
