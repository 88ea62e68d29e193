use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::camera::motion::{
    CameraMotionController, MotionCompleted, ViewerCamera, drive_camera_motion,
};
use crate::engine::camera::view_commands::{
    CurrentView, ViewRequestEvent, handle_view_requests, notify_view_transition_complete,
};
use crate::engine::core::app_state::{
    AppState, begin_entry_flight, transition_to_entry_flight, transition_to_running,
    update_loading_frontend,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{
    ManifestLoader, ViewerManifest, resolve_manifest, start_loading,
};
use crate::engine::loading::model_loader::{ModelLoader, poll_model_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::systems::fps_tracking::{fps_notification_system, fps_text_update_system};
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::ui::ViewerUiPlugin;

use constants::camera::{DEFAULT_CAMERA_POSITION, MODEL_CENTER};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers ViewerManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ViewerManifest>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(ViewerUiPlugin);

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<ModelLoader>()
        .init_resource::<CameraMotionController>()
        .init_resource::<CurrentView>()
        .add_event::<ViewRequestEvent>()
        .add_event::<MotionCompleted>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                resolve_manifest,
                poll_model_loading,
                transition_to_entry_flight,
                update_loading_frontend,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::EntryFlight), begin_entry_flight)
        .add_systems(
            Update,
            (drive_camera_motion, transition_to_running)
                .chain()
                .run_if(in_state(AppState::EntryFlight)),
        )
        .add_systems(
            Update,
            (
                // Runtime systems - only run when everything is ready
                handle_view_requests,
                drive_camera_motion,
                notify_view_transition_complete,
                fps_notification_system,
            )
                .chain()
                .run_if(in_state(AppState::Running)),
        );

    app.add_systems(Update, fps_text_update_system);

    app
}

fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

// Camera starts at the resting pose; the entry flight repositions it once
// the model is in place.
fn spawn_viewer_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(DEFAULT_CAMERA_POSITION).looking_at(MODEL_CENTER, Vec3::Y),
        ViewerCamera,
    ));
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    println!("=== GLTF SCENE VIEWER ===");
    spawn_viewer_camera(&mut commands);
    spawn_lighting(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
