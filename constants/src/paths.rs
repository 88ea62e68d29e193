/// Relative path of the glTF model shown by the viewer
pub const RELATIVE_MODEL_PATH: &str = "models/station.glb";

/// Label of the scene to pull out of the glTF file
pub const MODEL_SCENE_LABEL: &str = "Scene0";

/// Relative path of the optional viewer manifest
pub const RELATIVE_MANIFEST_PATH: &str = "viewer/manifest.json";

/// Canvas selector the wasm build renders into
pub const CANVAS_SELECTOR: &str = "#bevy";

/// Window title for native builds
pub const WINDOW_TITLE: &str = "Station Viewer";

/// Banner text revealed once the entry flight has landed
pub const DEFAULT_BANNER_TEXT: &str = "ORBITAL STATION";
