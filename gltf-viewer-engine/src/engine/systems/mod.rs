//! Core runtime systems for diagnostics.
//!
//! Provides FPS tracking for the in-app overlay and the frontend bridge.

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to the frontend via RPC and updates the UI overlay.
pub mod fps_tracking;
