//! Procedural head bob
//!
//! While the body is grounded and moving at or above the toggle speed, a
//! footstep waveform is added to the camera's local position every tick.
//! Otherwise the camera eases back to the rest position it had when the
//! bobber was created. Either way the camera is then aimed at a point ahead
//! of the camera holder.
//!
//! The waveform is added to wherever the camera currently is, not to the
//! rest position, so sustained bobbing can wander beyond one waveform
//! amplitude (see `test_bob_offsets_accumulate`).
//!
//! Easing back to rest happens only on idle ticks instead of after every
//! tick, and the phase clock stops while headbob is disabled instead of
//! tracking wall time.

use fallen_core::{approx_eq_vec3, Transform};
use fallen_physics::PhysicsMover;
use glam::Vec3;
use tracing::debug;

use super::{CameraHolder, CameraPose, HeadbobConfig};

/// Footstep waveform sampled at time `t`
pub fn bob_waveform(t: f32, amplitude: f32, frequency: f32) -> Vec3 {
    Vec3::new(
        (t * frequency).sin() * amplitude,
        (t * frequency / 2.0).cos() * amplitude * 2.0,
        0.0,
    )
}

/// State owned by the bobber
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BobState {
    base_position: Vec3,
    /// Waveform sample applied on the last tick (zero when idle)
    pub current_offset: Vec3,
    phase_time: f32,
}

impl BobState {
    fn new(base_position: Vec3) -> Self {
        Self {
            base_position,
            current_offset: Vec3::ZERO,
            phase_time: 0.0,
        }
    }

    /// Camera rest position captured at creation
    pub fn base_position(&self) -> Vec3 {
        self.base_position
    }

    /// Waveform clock; advances every enabled tick, never resets
    pub fn phase_time(&self) -> f32 {
        self.phase_time
    }
}

/// Head bob and focus-aim stage
#[derive(Debug, Clone)]
pub struct CameraBobber {
    pub config: HeadbobConfig,
    state: BobState,
    bobbing: bool,
}

impl CameraBobber {
    /// Create a bobber resting at the camera's current local position
    pub fn new(config: HeadbobConfig, camera_local_position: Vec3) -> Self {
        Self {
            config: config.clamped(),
            state: BobState::new(camera_local_position),
            bobbing: false,
        }
    }

    pub fn state(&self) -> &BobState {
        &self.state
    }

    /// Whether the last tick applied the waveform
    pub fn is_bobbing(&self) -> bool {
        self.bobbing
    }

    /// Bob guard: grounded and horizontal speed at or above the toggle speed
    pub fn should_bob(&self, velocity: Vec3, grounded: bool) -> bool {
        let horizontal_speed = Vec3::new(velocity.x, 0.0, velocity.z).length();
        grounded && horizontal_speed >= self.config.toggle_speed
    }

    /// Advance one tick.
    ///
    /// Reads the mover state produced by this tick's move, so it must run
    /// after locomotion.
    pub fn tick<M: PhysicsMover + ?Sized>(
        &mut self,
        mover: &M,
        body: &Transform,
        holder: &CameraHolder,
        pose: &mut CameraPose,
        dt: f32,
    ) {
        if !self.config.enabled {
            return;
        }

        let bobbing = self.should_bob(mover.velocity(), mover.is_grounded());
        if bobbing != self.bobbing {
            debug!(bobbing, phase_time = self.state.phase_time, "Head bob toggled");
            self.bobbing = bobbing;
        }

        if bobbing {
            let offset = bob_waveform(
                self.state.phase_time,
                self.config.amplitude,
                self.config.frequency,
            );
            pose.local_position += offset;
            self.state.current_offset = offset;
        } else {
            self.state.current_offset = Vec3::ZERO;
            self.relax(pose, dt);
        }
        self.state.phase_time += dt;

        self.aim(body, holder, pose);
    }

    fn relax(&self, pose: &mut CameraPose, dt: f32) {
        let base = self.state.base_position;
        if approx_eq_vec3(pose.local_position, base) {
            return;
        }
        let t = (self.config.return_rate * dt).clamp(0.0, 1.0);
        pose.local_position += (base - pose.local_position) * t;
    }

    /// Point the camera at the focus target ahead of the holder
    fn aim(&self, body: &Transform, holder: &CameraHolder, pose: &mut CameraPose) {
        let target = self.focus_target(body, holder, pose);
        let eye = pose.eye_position(body, holder);
        if let Some(rotation) = Transform::look_rotation(target - eye, Vec3::Y) {
            pose.rotation = rotation;
        }
    }

    /// World-space point the camera is aimed at
    pub fn focus_target(&self, body: &Transform, holder: &CameraHolder, pose: &CameraPose) -> Vec3 {
        let pivot = Vec3::new(
            body.position.x,
            body.position.y + holder.local_position.y,
            body.position.z,
        );
        pivot + holder.forward(body, pose.pitch) * self.config.focus_distance
    }
}
