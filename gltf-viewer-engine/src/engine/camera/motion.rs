use bevy::prelude::*;
use std::f32::consts::TAU;

use constants::camera::{
    DEFAULT_CAMERA_POSITION, ENTRY_DURATION_SECS, ENTRY_END_RADIUS, ENTRY_HEIGHT, ENTRY_ROTATIONS,
    ENTRY_START_RADIUS, MODEL_CENTER, TRANSITION_DURATION_SECS,
};
use constants::views::{ViewKey, view_preset};

/// Marker for the camera entity driven by scripted motions.
#[derive(Component)]
pub struct ViewerCamera;

/// Distinguishes the two scripted motions for completion handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    EntryOrbit,
    ViewTransition(ViewKey),
}

/// Event emitted once when an active motion reaches its end.
#[derive(Event)]
pub struct MotionCompleted {
    pub kind: MotionKind,
}

#[derive(Clone, Copy)]
enum ActiveMotion {
    EntryOrbit {
        started_at: f32,
    },
    ViewTransition {
        key: ViewKey,
        start: Vec3,
        target: Vec3,
        started_at: f32,
    },
}

impl ActiveMotion {
    fn kind(&self) -> MotionKind {
        match *self {
            ActiveMotion::EntryOrbit { .. } => MotionKind::EntryOrbit,
            ActiveMotion::ViewTransition { key, .. } => MotionKind::ViewTransition(key),
        }
    }

    fn progress(&self, now: f32) -> f32 {
        let (started_at, duration) = match *self {
            ActiveMotion::EntryOrbit { started_at } => (started_at, ENTRY_DURATION_SECS),
            ActiveMotion::ViewTransition { started_at, .. } => {
                (started_at, TRANSITION_DURATION_SECS)
            }
        };
        ((now - started_at) / duration).clamp(0.0, 1.0)
    }
}

/// Single-slot state machine for scripted camera motions.
///
/// At most one motion is active at a time. The entry flight replaces whatever
/// is active; view transitions are only accepted while the slot is empty.
#[derive(Resource, Default)]
pub struct CameraMotionController {
    active: Option<ActiveMotion>,
}

impl CameraMotionController {
    /// Start the orbital entry flight, replacing any active motion.
    pub fn play_entry(&mut self, now: f32) {
        self.active = Some(ActiveMotion::EntryOrbit { started_at: now });
    }

    /// Begin a transition from the given position to a preset view.
    ///
    /// Returns false while another motion holds the slot, or when the key
    /// has no preset entry. Rejected requests leave the slot untouched.
    pub fn begin_view_transition(&mut self, key: ViewKey, from: Vec3, now: f32) -> bool {
        if self.active.is_some() {
            return false;
        }

        let Some(preset) = view_preset(key) else {
            return false;
        };

        self.active = Some(ActiveMotion::ViewTransition {
            key,
            start: from,
            target: preset.position,
            started_at: now,
        });
        true
    }

    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_kind(&self) -> Option<MotionKind> {
        self.active.as_ref().map(ActiveMotion::kind)
    }
}

/// Quartic ease-out, decelerating hard into the end pose.
pub fn ease_out_quart(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(4)
}

/// Quadratic-in, cubic-out blend used by view transitions.
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Camera position along the entry orbit at the given progress.
///
/// The radius eases outward while the angle advances at a constant rate,
/// so the flight sweeps a widening spiral around the model at fixed height.
pub fn entry_orbit_position(progress: f32) -> Vec3 {
    let eased = ease_out_quart(progress);
    let radius = ENTRY_START_RADIUS + (ENTRY_END_RADIUS - ENTRY_START_RADIUS) * eased;
    let angle = ENTRY_ROTATIONS * TAU * progress;

    Vec3::new(
        MODEL_CENTER.x + angle.cos() * radius,
        ENTRY_HEIGHT,
        MODEL_CENTER.z + angle.sin() * radius,
    )
}

/// Advance the active motion and pose the camera for this frame.
///
/// The camera is re-aimed at the model centre on every driven frame. When a
/// motion reaches its end the slot is cleared, the final pose is applied
/// exactly, and a single completion event is emitted.
pub fn drive_camera_motion(
    time: Res<Time>,
    mut controller: ResMut<CameraMotionController>,
    mut completed: EventWriter<MotionCompleted>,
    mut camera: Query<&mut Transform, With<ViewerCamera>>,
) {
    let Some(motion) = controller.active else {
        return;
    };

    let Ok(mut transform) = camera.single_mut() else {
        return;
    };

    let progress = motion.progress(time.elapsed_secs());

    transform.translation = match motion {
        ActiveMotion::EntryOrbit { .. } => {
            if progress >= 1.0 {
                DEFAULT_CAMERA_POSITION
            } else {
                entry_orbit_position(progress)
            }
        }
        ActiveMotion::ViewTransition { start, target, .. } => {
            if progress >= 1.0 {
                target
            } else {
                start.lerp(target, ease_in_out(progress))
            }
        }
    };
    transform.look_at(MODEL_CENTER, Vec3::Y);

    if progress >= 1.0 {
        controller.active = None;
        completed.write(MotionCompleted {
            kind: motion.kind(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const EPSILON: f32 = 1e-4;

    fn assert_vec3_close(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).length() < EPSILON,
            "{actual:?} differs from {expected:?}"
        );
    }

    fn motion_world() -> (World, Schedule) {
        let mut world = World::new();
        world.init_resource::<CameraMotionController>();
        world.init_resource::<Events<MotionCompleted>>();
        world.insert_resource(Time::<()>::default());
        world.spawn((
            ViewerCamera,
            Transform::from_translation(DEFAULT_CAMERA_POSITION).looking_at(MODEL_CENTER, Vec3::Y),
        ));

        let mut schedule = Schedule::default();
        schedule.add_systems(drive_camera_motion);
        (world, schedule)
    }

    fn advance(world: &mut World, seconds: f32) {
        world
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(seconds));
    }

    fn camera_transform(world: &mut World) -> Transform {
        let mut query = world.query_filtered::<&Transform, With<ViewerCamera>>();
        *query.single(world).unwrap()
    }

    fn completed_kinds(world: &World) -> Vec<MotionKind> {
        let events = world.resource::<Events<MotionCompleted>>();
        events.get_cursor().read(events).map(|e| e.kind).collect()
    }

    #[test]
    fn ease_out_quart_hits_endpoints() {
        assert!(ease_out_quart(0.0).abs() < EPSILON);
        assert!((ease_out_quart(1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn ease_out_quart_is_monotonic() {
        let mut last = ease_out_quart(0.0);
        for i in 1..=100 {
            let value = ease_out_quart(i as f32 / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn ease_in_out_hits_endpoints_and_midpoint() {
        assert!(ease_in_out(0.0).abs() < EPSILON);
        assert!((ease_in_out(0.5) - 0.5).abs() < EPSILON);
        assert!((ease_in_out(1.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn ease_in_out_is_monotonic() {
        let mut last = ease_in_out(0.0);
        for i in 1..=100 {
            let value = ease_in_out(i as f32 / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn entry_orbit_starts_on_the_inner_radius() {
        let start = entry_orbit_position(0.0);
        assert_vec3_close(start, Vec3::new(ENTRY_START_RADIUS, ENTRY_HEIGHT, 0.0));
    }

    #[test]
    fn entry_orbit_angle_tracks_raw_progress() {
        // Stay below half a revolution so atan2 recovers the angle directly.
        for progress in [0.05, 0.1, 0.2, 0.4] {
            let position = entry_orbit_position(progress);
            let recovered = (position.z - MODEL_CENTER.z).atan2(position.x - MODEL_CENTER.x);
            let expected = ENTRY_ROTATIONS * TAU * progress;
            assert!(
                (recovered - expected).abs() < EPSILON,
                "angle at progress {progress} was {recovered}, expected {expected}"
            );
        }
    }

    #[test]
    fn entry_orbit_radius_follows_the_eased_curve() {
        let position = entry_orbit_position(0.5);
        let radius = Vec2::new(position.x - MODEL_CENTER.x, position.z - MODEL_CENTER.z).length();
        let expected =
            ENTRY_START_RADIUS + (ENTRY_END_RADIUS - ENTRY_START_RADIUS) * ease_out_quart(0.5);
        assert!((radius - expected).abs() < EPSILON);
    }

    #[test]
    fn entry_flight_snaps_to_the_resting_pose() {
        let (mut world, mut schedule) = motion_world();
        world.resource_mut::<CameraMotionController>().play_entry(0.0);

        advance(&mut world, 1.5);
        schedule.run(&mut world);
        let midway = camera_transform(&mut world).translation;
        assert!((midway - DEFAULT_CAMERA_POSITION).length() > 1.0);

        advance(&mut world, 2.0);
        schedule.run(&mut world);

        assert_vec3_close(
            camera_transform(&mut world).translation,
            DEFAULT_CAMERA_POSITION,
        );
        assert!(!world.resource::<CameraMotionController>().is_transitioning());
        assert_eq!(completed_kinds(&world), vec![MotionKind::EntryOrbit]);
    }

    #[test]
    fn completion_fires_only_once() {
        let (mut world, mut schedule) = motion_world();
        world.resource_mut::<CameraMotionController>().play_entry(0.0);

        advance(&mut world, 5.0);
        schedule.run(&mut world);
        schedule.run(&mut world);
        schedule.run(&mut world);

        assert_eq!(completed_kinds(&world).len(), 1);
    }

    #[test]
    fn view_transition_starts_from_the_captured_pose() {
        let (mut world, mut schedule) = motion_world();
        let from = Vec3::new(2.0, -1.0, 8.0);
        world
            .resource_mut::<CameraMotionController>()
            .begin_view_transition(ViewKey::Front, from, 0.0);

        schedule.run(&mut world);
        assert_vec3_close(camera_transform(&mut world).translation, from);
    }

    #[test]
    fn view_transition_lands_exactly_on_the_target() {
        let (mut world, mut schedule) = motion_world();
        world
            .resource_mut::<CameraMotionController>()
            .begin_view_transition(ViewKey::Wide, DEFAULT_CAMERA_POSITION, 0.0);

        advance(&mut world, 2.5);
        schedule.run(&mut world);

        let target = view_preset(ViewKey::Wide).unwrap().position;
        assert_eq!(camera_transform(&mut world).translation, target);
        assert_eq!(
            completed_kinds(&world),
            vec![MotionKind::ViewTransition(ViewKey::Wide)]
        );
    }

    #[test]
    fn camera_always_faces_the_model_centre() {
        let (mut world, mut schedule) = motion_world();
        world.resource_mut::<CameraMotionController>().play_entry(0.0);

        for _ in 0..4 {
            advance(&mut world, 0.6);
            schedule.run(&mut world);

            let transform = camera_transform(&mut world);
            let expected = (MODEL_CENTER - transform.translation).normalize();
            assert_vec3_close(*transform.forward(), expected);
        }
    }

    #[test]
    fn requests_are_rejected_while_any_motion_is_active() {
        let mut controller = CameraMotionController::default();
        controller.play_entry(0.0);

        assert!(!controller.begin_view_transition(ViewKey::Front, Vec3::ZERO, 0.5));
        assert_eq!(controller.active_kind(), Some(MotionKind::EntryOrbit));
    }

    #[test]
    fn back_to_back_requests_keep_the_first_target() {
        let mut controller = CameraMotionController::default();

        assert!(controller.begin_view_transition(ViewKey::Front, DEFAULT_CAMERA_POSITION, 0.0));
        assert!(!controller.begin_view_transition(ViewKey::Wide, DEFAULT_CAMERA_POSITION, 0.1));
        assert_eq!(
            controller.active_kind(),
            Some(MotionKind::ViewTransition(ViewKey::Front))
        );
    }

    #[test]
    fn entry_replaces_an_active_view_transition() {
        let mut controller = CameraMotionController::default();

        assert!(controller.begin_view_transition(ViewKey::Top, DEFAULT_CAMERA_POSITION, 0.0));
        controller.play_entry(0.5);
        assert_eq!(controller.active_kind(), Some(MotionKind::EntryOrbit));
    }
}
