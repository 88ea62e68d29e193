//! Shared configuration for the viewer workspace.

/// Camera motion timing and geometry constants.
pub mod camera;

/// Asset paths and window configuration strings.
pub mod paths;

/// Named camera view presets and their string key mapping.
pub mod views;
