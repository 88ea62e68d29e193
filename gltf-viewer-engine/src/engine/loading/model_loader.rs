use bevy::prelude::*;

use constants::paths::MODEL_SCENE_LABEL;

use crate::engine::loading::progress::LoadingProgress;

/// Tracks the glTF scene request from dispatch to spawn.
#[derive(Resource, Default)]
pub struct ModelLoader {
    handle: Option<Handle<Scene>>,
    failure_logged: bool,
}

impl ModelLoader {
    /// Request the labelled scene inside the given glTF file.
    pub fn begin(&mut self, asset_server: &AssetServer, model_path: &str) {
        let scene_path = format!("{}#{}", model_path, MODEL_SCENE_LABEL);
        println!("Loading model from: {}", scene_path);
        self.handle = Some(asset_server.load(scene_path));
    }
}

// Spawn the scene once the asset server reports it loaded. A failed load is
// logged once and the app stays in the loading state.
pub fn poll_model_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    mut model_loader: ResMut<ModelLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.model_spawned {
        return;
    }

    let Some(ref handle) = model_loader.handle else {
        return;
    };

    match asset_server.get_load_state(handle) {
        Some(bevy::asset::LoadState::Loaded) => {
            println!("✓ Model scene loaded successfully");
            commands.spawn(SceneRoot(handle.clone()));
            loading_progress.model_loaded = true;
            loading_progress.model_spawned = true;
        }
        Some(bevy::asset::LoadState::Failed(error)) => {
            if !model_loader.failure_logged {
                error!("Model scene failed to load: {}", error);
                model_loader.failure_logged = true;
            }
        }
        _ => {}
    }
}
