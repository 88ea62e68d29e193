//! Scripted camera motion for the viewer scene.
//!
//! Provides the orbital entry flight, preset view transitions, and the
//! single-slot controller that sequences them.

/// Easing curves, the motion state machine, and the per-frame drive system.
pub mod motion;

/// View request events, current-view tracking, and request handling.
pub mod view_commands;
