//! In-app overlays: view buttons, status readouts, and the title banner.
//!
//! All panels are spawned once and updated by reflect systems; the banner
//! reveal is sequenced by UI-owned timers after the entry flight lands.

/// Instructions panel, current-view line, and FPS readout.
pub mod status_panel;

/// Post-entry title banner reveal sequencing.
pub mod title_reveal;

/// Camera view button panel with active-view highlighting.
pub mod view_panel;

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use status_panel::{reflect_current_view, reflect_transition_status, spawn_status_panel};
use title_reveal::{
    TitleRevealState, advance_title_reveal, animate_title_letters, begin_title_reveal,
    spawn_title_banner,
};
use view_panel::{
    handle_view_buttons, handle_view_keyboard_shortcuts, reflect_view_buttons, spawn_view_panel,
};

// Registers the overlay panels, reveal state, and their update systems.
pub struct ViewerUiPlugin;

impl Plugin for ViewerUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TitleRevealState>()
            .add_systems(Startup, (spawn_view_panel, spawn_status_panel))
            .add_systems(OnEnter(AppState::EntryFlight), spawn_title_banner)
            .add_systems(
                Update,
                (
                    handle_view_buttons,
                    handle_view_keyboard_shortcuts,
                    reflect_view_buttons,
                    reflect_current_view,
                    reflect_transition_status,
                ),
            )
            .add_systems(
                Update,
                (begin_title_reveal, advance_title_reveal, animate_title_letters).chain(),
            );
    }
}
