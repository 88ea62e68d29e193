//! JSON-RPC 2.0 communication layer for the embedding host page.
//!
//! Implements bidirectional messaging between the Bevy viewer and the page
//! hosting its iframe via postMessage, supporting both request-response and
//! notification patterns.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (Parent Window)  <──postMessage──>  Viewer (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Process request
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! ## Existing Methods
//!
//! - `set_view`: request a transition to a named camera view
//! - `get_camera_state`: read the camera position, active view and
//!   transition flag
//! - `get_fps`: retrieve the current frame rate
//!
//! ## Outgoing Notifications
//!
//! - `load_state`: loading progress flags while assets resolve
//! - `entry_complete`: the entry flight has landed
//! - `view_changed`: a view request was accepted
//! - `view_transition_complete`: the camera reached the requested view
//! - `fps_update`: periodic frame rate report
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error

/// JSON-RPC 2.0 bidirectional communication system for host page integration.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
