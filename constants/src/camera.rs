use bevy::math::Vec3;

/// Centre of the model and fixed look-at target for every camera motion
pub const MODEL_CENTER: Vec3 = Vec3::new(0.0, -2.0, 0.0);

/// Resting pose the entry flight lands on, identical to the default view preset
pub const DEFAULT_CAMERA_POSITION: Vec3 = Vec3::new(0.0, -2.0, 15.0);

/// Entry flight duration in seconds
pub const ENTRY_DURATION_SECS: f32 = 3.0;

/// Orbit radius at the start of the entry flight
pub const ENTRY_START_RADIUS: f32 = 3.0;

/// Orbit radius at the end of the entry flight
pub const ENTRY_END_RADIUS: f32 = 15.0;

/// Full revolutions swept over the course of the entry flight
pub const ENTRY_ROTATIONS: f32 = 1.23;

/// Camera height held constant throughout the entry flight
pub const ENTRY_HEIGHT: f32 = -2.0;

/// View preset transition duration in seconds
pub const TRANSITION_DURATION_SECS: f32 = 2.0;
