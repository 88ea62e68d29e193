use bevy::prelude::*;

use constants::views::{VIEW_PRESETS, ViewKey};

use crate::engine::camera::motion::CameraMotionController;
use crate::engine::camera::view_commands::{CurrentView, ViewRequestEvent, ViewRequestSource};

const BUTTON_BASE: Color = Color::srgb(0.22, 0.24, 0.28);
const BUTTON_ACTIVE: Color = Color::srgb(0.30, 0.34, 0.40);
const BUTTON_DISABLED: Color = Color::srgb(0.15, 0.16, 0.18);

#[derive(Component)]
pub struct ViewPanelRoot;

/// Button switching to a fixed camera view.
#[derive(Component)]
pub struct ViewButton(pub ViewKey);

// Spawns the view panel with one button per preset
pub fn spawn_view_panel(mut commands: Commands) {
    commands
        .spawn((
            ViewPanelRoot,
            Name::new("ViewPanel"),
            BackgroundColor(Color::srgb(0.10, 0.11, 0.13)),
            Node {
                width: Val::Px(170.0),
                position_type: PositionType::Absolute,
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Stretch,
                justify_content: JustifyContent::FlexStart,
                row_gap: Val::Px(8.0),
                padding: UiRect::axes(Val::Px(12.0), Val::Px(10.0)),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Camera Views"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 1.0)),
            ));

            for preset in VIEW_PRESETS {
                parent
                    .spawn((
                        ViewButton(preset.key),
                        Button,
                        Name::new(preset.label),
                        BackgroundColor(BUTTON_BASE),
                        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Px(32.0),
                            display: Display::Flex,
                            align_items: AlignItems::Center,
                            justify_content: JustifyContent::Center,
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                    ))
                    .with_children(|btn| {
                        btn.spawn((
                            Text::new(preset.label),
                            TextFont {
                                font_size: 14.0,
                                ..default()
                            },
                            TextColor(Color::srgb(1.0, 1.0, 1.0)),
                        ));
                    });
            }
        });
}

/// Emit view requests for pressed buttons.
pub fn handle_view_buttons(
    interactions: Query<(&Interaction, &ViewButton), (Changed<Interaction>, With<Button>)>,
    mut view_events: EventWriter<ViewRequestEvent>,
) {
    for (interaction, button) in &interactions {
        if *interaction == Interaction::Pressed {
            view_events.write(ViewRequestEvent {
                key: button.0,
                source: ViewRequestSource::Ui,
            });
        }
    }
}

/// Number keys 1-9 mirror the view buttons.
pub fn handle_view_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut view_events: EventWriter<ViewRequestEvent>,
) {
    const KEY_BINDINGS: &[(KeyCode, ViewKey)] = &[
        (KeyCode::Digit1, ViewKey::Default),
        (KeyCode::Digit2, ViewKey::Front),
        (KeyCode::Digit3, ViewKey::Back),
        (KeyCode::Digit4, ViewKey::Left),
        (KeyCode::Digit5, ViewKey::Right),
        (KeyCode::Digit6, ViewKey::Top),
        (KeyCode::Digit7, ViewKey::Bottom),
        (KeyCode::Digit8, ViewKey::Closeup),
        (KeyCode::Digit9, ViewKey::Wide),
    ];

    for (key_code, view_key) in KEY_BINDINGS {
        if keyboard.just_pressed(*key_code) {
            view_events.write(ViewRequestEvent {
                key: *view_key,
                source: ViewRequestSource::Keyboard,
            });
        }
    }
}

/// Highlight the active view and dim the panel while a motion runs.
pub fn reflect_view_buttons(
    current_view: Res<CurrentView>,
    controller: Res<CameraMotionController>,
    mut buttons: Query<(&ViewButton, &mut BackgroundColor)>,
) {
    for (button, mut background) in &mut buttons {
        let colour = if controller.is_transitioning() {
            BUTTON_DISABLED
        } else if button.0 == current_view.0 {
            BUTTON_ACTIVE
        } else {
            BUTTON_BASE
        };

        if background.0 != colour {
            *background = BackgroundColor(colour);
        }
    }
}
