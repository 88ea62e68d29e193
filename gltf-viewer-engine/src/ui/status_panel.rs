use bevy::prelude::*;

use constants::views::view_preset;

use crate::engine::camera::motion::CameraMotionController;
use crate::engine::camera::view_commands::CurrentView;
use crate::engine::core::app_state::FpsText;

#[derive(Component)]
pub struct CurrentViewText;

#[derive(Component)]
pub struct TransitionStatusText;

// Spawns the instructions and status panel plus the FPS overlay
pub fn spawn_status_panel(mut commands: Commands) {
    commands
        .spawn((
            Name::new("StatusPanel"),
            BackgroundColor(Color::srgba(0.10, 0.11, 0.13, 0.85)),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                bottom: Val::Px(12.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Keys 1-9 or the view panel switch camera views"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.75, 0.78, 0.82)),
            ));

            parent.spawn((
                CurrentViewText,
                Text::new("Current view: Default View"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 1.0)),
            ));

            parent.spawn((
                TransitionStatusText,
                Text::new(""),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.80, 0.35)),
            ));
        });

    commands.spawn((
        FpsText,
        Text::new("FPS: "),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.0, 0.0)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));
}

/// Keep the current-view line in sync with the camera state.
pub fn reflect_current_view(
    current_view: Res<CurrentView>,
    mut query: Query<&mut Text, With<CurrentViewText>>,
) {
    let label = view_preset(current_view.0).map_or("unknown", |preset| preset.label);
    let line = format!("Current view: {}", label);

    if let Ok(mut text) = query.single_mut() {
        if text.0 != line {
            *text = Text::new(line);
        }
    }
}

/// Show the transition line only while a motion holds the slot.
pub fn reflect_transition_status(
    controller: Res<CameraMotionController>,
    mut query: Query<&mut Text, With<TransitionStatusText>>,
) {
    let line = if controller.is_transitioning() {
        "Transitioning..."
    } else {
        ""
    };

    if let Ok(mut text) = query.single_mut() {
        if text.0 != line {
            *text = Text::new(line);
        }
    }
}
