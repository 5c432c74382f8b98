//! Locomotion controller: input to displacement, with gravity and jumping

use fallen_core::Transform;
use fallen_physics::PhysicsMover;
use glam::{Vec2, Vec3};
use tracing::debug;

use crate::input::InputFrame;

use super::MovementConfig;

/// Motion integrated across ticks
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionState {
    /// World-space horizontal velocity (x, z) sampled on the last grounded
    /// tick. Reused unchanged while airborne.
    pub last_grounded_horizontal: Vec2,
    /// Vertical velocity (jumping/falling)
    pub vertical_velocity: f32,
    /// Grounded flag read from the mover at the start of the last tick
    pub grounded: bool,
}

impl MotionState {
    /// Full velocity submitted to the mover
    pub fn velocity(&self) -> Vec3 {
        Vec3::new(
            self.last_grounded_horizontal.x,
            self.vertical_velocity,
            self.last_grounded_horizontal.y,
        )
    }
}

/// Turns input frames into collision-aware moves.
///
/// There is no air control: the horizontal velocity is frozen at the last
/// grounded sample until the body touches ground again. Fall speed is not
/// capped.
#[derive(Debug, Clone)]
pub struct LocomotionController {
    /// Movement configuration
    pub config: MovementConfig,
    state: MotionState,
    is_moving: bool,
}

impl LocomotionController {
    /// Create a locomotion controller
    pub fn new(config: MovementConfig) -> Self {
        Self {
            config,
            state: MotionState::default(),
            is_moving: false,
        }
    }

    /// Current motion state
    pub fn motion(&self) -> MotionState {
        self.state
    }

    /// Whether the last input frame carried movement input.
    ///
    /// Reflects input, not actual motion; a player pushing into a wall or
    /// steering mid-air still counts as moving.
    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    /// Advance one tick and submit the resulting displacement to `mover`.
    ///
    /// `body_yaw_degrees` orients the move axis; positive yaw turns right.
    pub fn tick<M: PhysicsMover + ?Sized>(
        &mut self,
        mover: &mut M,
        input: &InputFrame,
        body_yaw_degrees: f32,
        dt: f32,
    ) {
        let grounded = mover.is_grounded();
        if grounded != self.state.grounded {
            if grounded {
                debug!(fall_speed = self.state.vertical_velocity, "Landed");
            } else {
                debug!(vertical_velocity = self.state.vertical_velocity, "Left ground");
            }
        }
        self.state.grounded = grounded;

        if grounded {
            let speed_multiplier = self.config.speed_multiplier(input.sprint_held);
            let local = Vec3::new(input.move_axis.x, 0.0, -input.move_axis.y)
                * self.config.speed
                * speed_multiplier;
            let horizontal = Transform::yaw_rotation(body_yaw_degrees) * local;
            self.state.last_grounded_horizontal = Vec2::new(horizontal.x, horizontal.z);

            self.state.vertical_velocity = if input.jump_triggered {
                debug!(jump_force = self.config.jump_force, "Jump");
                self.config.jump_force
            } else {
                self.config.grounded_bias
            };
        } else {
            self.state.vertical_velocity -= self.config.gravity * dt;
        }

        mover.move_character(self.state.velocity() * dt, dt);

        self.is_moving = input.is_moving();
    }
}

impl Default for LocomotionController {
    fn default() -> Self {
        Self::new(MovementConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedMover;

    fn forward() -> InputFrame {
        InputFrame {
            move_axis: Vec2::new(0.0, 1.0),
            ..Default::default()
        }
    }

    fn assert_vec_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_grounded_walk_forward() {
        let mut controller = LocomotionController::default();
        let mut mover = ScriptedMover::grounded();

        controller.tick(&mut mover, &forward(), 0.0, 0.5);

        assert_eq!(mover.last_move(), Vec3::new(0.0, -0.25, -1.5));
        assert_eq!(controller.motion().last_grounded_horizontal, Vec2::new(0.0, -3.0));
        assert_eq!(controller.motion().vertical_velocity, -0.5);
        assert!(controller.is_moving());
    }

    #[test]
    fn test_sprint_multiplies_speed() {
        let mut controller = LocomotionController::default();
        let mut mover = ScriptedMover::grounded();
        let input = InputFrame {
            sprint_held: true,
            ..forward()
        };

        controller.tick(&mut mover, &input, 0.0, 0.5);
        assert_eq!(controller.motion().last_grounded_horizontal, Vec2::new(0.0, -6.0));
    }

    #[test]
    fn test_move_axis_follows_body_yaw() {
        let mut controller = LocomotionController::default();
        let mut mover = ScriptedMover::grounded();

        controller.tick(&mut mover, &forward(), 90.0, 1.0);
        let horizontal = controller.motion().last_grounded_horizontal;
        assert_vec_near(Vec3::new(horizontal.x, 0.0, horizontal.y), Vec3::new(3.0, 0.0, 0.0));

        let strafe_left = InputFrame {
            move_axis: Vec2::new(-1.0, 0.0),
            ..Default::default()
        };
        controller.tick(&mut mover, &strafe_left, 0.0, 1.0);
        assert_eq!(controller.motion().last_grounded_horizontal, Vec2::new(-3.0, 0.0));
    }

    #[test]
    fn test_no_air_control() {
        let mut controller = LocomotionController::default();
        let mut mover = ScriptedMover::grounded();
        let dt = 0.1;

        controller.tick(&mut mover, &forward(), 0.0, dt);
        let captured = controller.motion().last_grounded_horizontal;

        mover.grounded = false;
        let steer = [
            InputFrame {
                move_axis: Vec2::new(1.0, 0.0),
                sprint_held: true,
                ..Default::default()
            },
            InputFrame::default(),
            InputFrame {
                move_axis: Vec2::new(0.0, -1.0),
                ..Default::default()
            },
        ];
        for (i, input) in steer.iter().enumerate() {
            controller.tick(&mut mover, input, 45.0 * i as f32, dt);
            assert_eq!(controller.motion().last_grounded_horizontal, captured);
            let step = mover.last_move();
            assert_eq!(Vec2::new(step.x, step.z), captured * dt);
        }
    }

    #[test]
    fn test_jump_sets_exact_force() {
        let mut controller = LocomotionController::default();
        let mut mover = ScriptedMover::grounded();
        let input = InputFrame {
            jump_triggered: true,
            ..Default::default()
        };

        controller.tick(&mut mover, &input, 0.0, 1.0 / 60.0);
        assert_eq!(controller.motion().vertical_velocity, controller.config.jump_force);
        assert!(mover.last_move().y > 0.0);
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let mut controller = LocomotionController::default();
        let mut mover = ScriptedMover::default();
        let input = InputFrame {
            jump_triggered: true,
            ..Default::default()
        };

        controller.tick(&mut mover, &input, 0.0, 0.5);
        assert_eq!(controller.motion().vertical_velocity, -0.5 * 9.81);
    }

    #[test]
    fn test_gravity_decreases_by_exact_step() {
        let mut controller = LocomotionController::default();
        let mut mover = ScriptedMover::grounded();
        let dt = 1.0 / 60.0;

        controller.tick(
            &mut mover,
            &InputFrame {
                jump_triggered: true,
                ..Default::default()
            },
            0.0,
            dt,
        );
        mover.grounded = false;

        let mut previous = controller.motion().vertical_velocity;
        for _ in 0..600 {
            controller.tick(&mut mover, &InputFrame::default(), 0.0, dt);
            let current = controller.motion().vertical_velocity;
            assert!(current < previous);
            assert_eq!(current, previous - controller.config.gravity * dt);
            previous = current;
        }
        // Ten seconds of free fall with no terminal velocity
        assert!(previous < -80.0);
    }

    #[test]
    fn test_landing_resets_to_bias() {
        let mut controller = LocomotionController::default();
        let mut mover = ScriptedMover::default();

        for _ in 0..10 {
            controller.tick(&mut mover, &InputFrame::default(), 0.0, 0.1);
        }
        assert!(controller.motion().vertical_velocity < -5.0);

        mover.grounded = true;
        controller.tick(&mut mover, &InputFrame::default(), 0.0, 0.1);
        assert_eq!(controller.motion().vertical_velocity, -0.5);
        assert!(controller.motion().grounded);
    }

    #[test]
    fn test_is_moving_tracks_input_only() {
        let mut controller = LocomotionController::default();
        let mut mover = ScriptedMover::default();

        controller.tick(&mut mover, &forward(), 0.0, 0.1);
        assert!(controller.is_moving());
        // Airborne, the body keeps its (zero) momentum regardless
        assert_eq!(controller.motion().last_grounded_horizontal, Vec2::ZERO);

        controller.tick(&mut mover, &InputFrame::default(), 0.0, 0.1);
        assert!(!controller.is_moving());
    }
}
