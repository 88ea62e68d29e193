use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::paths::{DEFAULT_BANNER_TEXT, RELATIVE_MANIFEST_PATH, RELATIVE_MODEL_PATH};

use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::loading::progress::LoadingProgress;

/// Optional viewer configuration, loaded from a JSON manifest.
/// Missing fields fall back to the built-in defaults.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct ViewerManifest {
    #[serde(default = "default_model_path")]
    pub model: String,
    #[serde(default = "default_banner_title")]
    pub title: String,
}

fn default_model_path() -> String {
    RELATIVE_MODEL_PATH.to_string()
}

fn default_banner_title() -> String {
    DEFAULT_BANNER_TEXT.to_string()
}

/// Resolved configuration the rest of the app reads.
#[derive(Resource, Clone)]
pub struct ViewerConfig {
    pub model_path: String,
    pub banner_title: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            banner_title: default_banner_title(),
        }
    }
}

impl From<&ViewerManifest> for ViewerConfig {
    fn from(manifest: &ViewerManifest) -> Self {
        Self {
            model_path: manifest.model.clone(),
            banner_title: manifest.title.clone(),
        }
    }
}

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<ViewerManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    println!("Loading viewer manifest from: {}", RELATIVE_MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(RELATIVE_MANIFEST_PATH));
}

// Resolve configuration once the manifest settles, then start the model load
pub fn resolve_manifest(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut model_loader: ResMut<ModelLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<ViewerManifest>>,
) {
    if loading_progress.manifest_resolved {
        return;
    }

    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    let config = if let Some(manifest) = manifests.get(handle) {
        println!("✓ Viewer manifest loaded successfully");
        ViewerConfig::from(manifest)
    } else if matches!(
        asset_server.get_load_state(handle),
        Some(bevy::asset::LoadState::Failed(_))
    ) {
        warn!("Viewer manifest unavailable, using built-in defaults");
        ViewerConfig::default()
    } else {
        return;
    };

    model_loader.begin(&asset_server, &config.model_path);
    commands.insert_resource(config);
    loading_progress.manifest_resolved = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_manifest_resolves_to_defaults() {
        let manifest: ViewerManifest = serde_json::from_str("{}").unwrap();
        assert_eq!(manifest.model, RELATIVE_MODEL_PATH);
        assert_eq!(manifest.title, DEFAULT_BANNER_TEXT);
    }

    #[test]
    fn manifest_fields_override_defaults() {
        let manifest: ViewerManifest =
            serde_json::from_str(r#"{"model": "models/probe.glb", "title": "PROBE"}"#).unwrap();
        let config = ViewerConfig::from(&manifest);
        assert_eq!(config.model_path, "models/probe.glb");
        assert_eq!(config.banner_title, "PROBE");
    }
}
