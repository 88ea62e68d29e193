use bevy::prelude::*;

use crate::engine::camera::motion::{MotionCompleted, MotionKind, ease_out_quart};
use crate::engine::loading::manifest_loader::ViewerConfig;

/// Delay between entry completion and the banner becoming visible.
const REVEAL_DELAY_SECS: f32 = 0.5;

/// Delay between the banner appearing and the letter animation starting.
const ANIMATE_DELAY_SECS: f32 = 0.1;

/// Per-letter stagger within the settle animation.
const LETTER_STAGGER_SECS: f32 = 0.06;

/// How long each letter takes to drop into place.
const LETTER_SETTLE_SECS: f32 = 0.45;

/// Offset letters fall from while settling.
const LETTER_DROP_PX: f32 = 18.0;

#[derive(Component)]
pub struct TitleBanner;

/// Single banner letter with its stagger slot.
#[derive(Component)]
pub struct TitleLetter {
    pub index: usize,
}

/// Reveal sequencing state, driven by UI timers after the entry flight.
/// The motion engine only reports completion; the delays live here.
#[derive(Resource, Default)]
pub enum TitleRevealState {
    #[default]
    Waiting,
    RevealPending(Timer),
    AnimatePending(Timer),
    Animating {
        elapsed: f32,
    },
    Done,
}

// Spawns the hidden banner from the resolved configuration
pub fn spawn_title_banner(mut commands: Commands, config: Res<ViewerConfig>) {
    commands
        .spawn((
            TitleBanner,
            Name::new("TitleBanner"),
            Visibility::Hidden,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(28.0),
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                display: Display::Flex,
                justify_content: JustifyContent::Center,
                column_gap: Val::Px(2.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            for (index, letter) in config.banner_title.chars().enumerate() {
                parent.spawn((
                    TitleLetter { index },
                    Text::new(letter.to_string()),
                    TextFont {
                        font_size: 42.0,
                        ..default()
                    },
                    TextColor(Color::srgba(1.0, 1.0, 1.0, 0.0)),
                    Node {
                        top: Val::Px(-LETTER_DROP_PX),
                        ..default()
                    },
                ));
            }
        });
}

/// Start the reveal countdown once the entry flight lands.
pub fn begin_title_reveal(
    mut completed: EventReader<MotionCompleted>,
    mut reveal: ResMut<TitleRevealState>,
) {
    for event in completed.read() {
        if matches!(event.kind, MotionKind::EntryOrbit) {
            *reveal = TitleRevealState::RevealPending(Timer::from_seconds(
                REVEAL_DELAY_SECS,
                TimerMode::Once,
            ));
        }
    }
}

/// Walk the reveal sequence: delay, show the banner, delay, animate.
pub fn advance_title_reveal(
    time: Res<Time>,
    mut reveal: ResMut<TitleRevealState>,
    mut banner: Query<&mut Visibility, With<TitleBanner>>,
) {
    match &mut *reveal {
        TitleRevealState::RevealPending(timer) => {
            if timer.tick(time.delta()).just_finished() {
                if let Ok(mut visibility) = banner.single_mut() {
                    *visibility = Visibility::Visible;
                }
                *reveal = TitleRevealState::AnimatePending(Timer::from_seconds(
                    ANIMATE_DELAY_SECS,
                    TimerMode::Once,
                ));
            }
        }
        TitleRevealState::AnimatePending(timer) => {
            if timer.tick(time.delta()).just_finished() {
                *reveal = TitleRevealState::Animating { elapsed: 0.0 };
            }
        }
        _ => {}
    }
}

/// Drop and fade each letter into place with a small stagger.
pub fn animate_title_letters(
    time: Res<Time>,
    mut reveal: ResMut<TitleRevealState>,
    mut letters: Query<(&TitleLetter, &mut Node, &mut TextColor)>,
) {
    let TitleRevealState::Animating { elapsed } = &mut *reveal else {
        return;
    };

    *elapsed += time.delta_secs();
    let now = *elapsed;
    let mut all_settled = true;

    for (letter, mut node, mut colour) in &mut letters {
        let local = (now - letter.index as f32 * LETTER_STAGGER_SECS) / LETTER_SETTLE_SECS;
        let progress = local.clamp(0.0, 1.0);
        let eased = ease_out_quart(progress);

        node.top = Val::Px(-LETTER_DROP_PX * (1.0 - eased));
        *colour = TextColor(Color::srgba(1.0, 1.0, 1.0, eased));

        if progress < 1.0 {
            all_settled = false;
        }
    }

    if all_settled {
        *reveal = TitleRevealState::Done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn reveal_world() -> (World, Schedule) {
        let mut world = World::new();
        world.init_resource::<TitleRevealState>();
        world.init_resource::<Events<MotionCompleted>>();
        world.insert_resource(Time::<()>::default());
        world.spawn((TitleBanner, Visibility::Hidden));

        let mut schedule = Schedule::default();
        schedule.add_systems((begin_title_reveal, advance_title_reveal).chain());
        (world, schedule)
    }

    fn advance(world: &mut World, seconds: f32) {
        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(seconds));
    }

    fn banner_visibility(world: &mut World) -> Visibility {
        let mut query = world.query_filtered::<&Visibility, With<TitleBanner>>();
        *query.single(world).unwrap()
    }

    #[test]
    fn reveal_waits_for_entry_completion() {
        let (mut world, mut schedule) = reveal_world();

        advance(&mut world, 5.0);
        schedule.run(&mut world);

        assert!(matches!(
            *world.resource::<TitleRevealState>(),
            TitleRevealState::Waiting
        ));
        assert_eq!(banner_visibility(&mut world), Visibility::Hidden);
    }

    #[test]
    fn banner_shows_after_the_reveal_delay() {
        let (mut world, mut schedule) = reveal_world();
        world.send_event(MotionCompleted {
            kind: MotionKind::EntryOrbit,
        });

        advance(&mut world, 0.1);
        schedule.run(&mut world);
        assert_eq!(banner_visibility(&mut world), Visibility::Hidden);

        advance(&mut world, 0.5);
        schedule.run(&mut world);
        assert_eq!(banner_visibility(&mut world), Visibility::Visible);
        assert!(matches!(
            *world.resource::<TitleRevealState>(),
            TitleRevealState::AnimatePending(_)
        ));

        advance(&mut world, 0.2);
        schedule.run(&mut world);
        assert!(matches!(
            *world.resource::<TitleRevealState>(),
            TitleRevealState::Animating { .. }
        ));
    }

    #[test]
    fn letters_settle_into_place() {
        let mut world = World::new();
        world.insert_resource(TitleRevealState::Animating { elapsed: 0.0 });
        world.insert_resource(Time::<()>::default());
        world.spawn((
            TitleLetter { index: 0 },
            Node {
                top: Val::Px(-LETTER_DROP_PX),
                ..Default::default()
            },
            TextColor(Color::srgba(1.0, 1.0, 1.0, 0.0)),
        ));

        let mut schedule = Schedule::default();
        schedule.add_systems(animate_title_letters);

        advance(&mut world, 1.0);
        schedule.run(&mut world);

        let mut query = world.query::<(&Node, &TextColor)>();
        let (node, colour) = query.single(&world).unwrap();
        assert_eq!(node.top, Val::Px(0.0));
        let Color::Srgba(srgba) = colour.0 else {
            panic!("expected srgba colour");
        };
        assert!((srgba.alpha - 1.0).abs() < 1e-4);
        assert!(matches!(
            *world.resource::<TitleRevealState>(),
            TitleRevealState::Done
        ));
    }
}
