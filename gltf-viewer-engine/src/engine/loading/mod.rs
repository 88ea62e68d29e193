//! Asset loading and initialisation systems for the viewer scene.
//!
//! Manages the two-stage loading pipeline from manifest parsing through
//! glTF scene spawning with progress tracking.

/// Viewer manifest loading and configuration resolution from JSON.
///
/// Falls back to built-in defaults when the manifest is missing or unreadable.
pub mod manifest_loader;

/// glTF scene load monitoring and spawning.
///
/// Tracks the scene request against the asset server and spawns it once ready.
pub mod model_loader;

/// Loading progress tracking resource for state transitions.
///
/// Monitors completion of manifest resolution and model spawning.
pub mod progress;
