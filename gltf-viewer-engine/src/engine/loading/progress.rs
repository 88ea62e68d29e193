use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_resolved: bool,
    pub model_loaded: bool,
    pub model_spawned: bool,
}
