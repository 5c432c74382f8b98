//! Player rig: owns the body mover and runs the per-tick pipeline
//!
//! Tick order is fixed: locomotion moves the body, the rotator writes yaw
//! and pitch, then the bobber reads the mover's fresh velocity, updates the
//! camera position and finally aims the camera.

use fallen_core::Transform;
use fallen_physics::PhysicsMover;
use glam::{Mat4, Vec3};
use tracing::info;

use crate::camera::{CameraBobber, CameraHolder, CameraPose, CameraRotator};
use crate::config::PlayerConfig;
use crate::error::RigError;
use crate::input::InputFrame;
use crate::player::LocomotionController;

/// A first-person player: body, camera holder and camera
pub struct PlayerRig<M: PhysicsMover> {
    mover: M,
    locomotion: LocomotionController,
    rotator: CameraRotator,
    bobber: CameraBobber,
    holder: CameraHolder,
    pose: CameraPose,
    /// Body heading in degrees; positive turns right
    body_yaw: f32,
    enabled: bool,
}

impl<M: PhysicsMover> PlayerRig<M> {
    pub fn builder() -> PlayerRigBuilder<M> {
        PlayerRigBuilder::new()
    }

    /// Run one tick. Does nothing while the rig is disabled.
    pub fn tick(&mut self, input: &InputFrame, dt: f32) {
        if !self.enabled {
            return;
        }

        self.locomotion
            .tick(&mut self.mover, input, self.body_yaw, dt);
        self.rotator
            .tick(input.look_axis, &mut self.body_yaw, &mut self.pose);

        let body = self.body_transform();
        self.bobber
            .tick(&self.mover, &body, &self.holder, &mut self.pose, dt);
    }

    /// Stop or resume ticking. No state is reset either way.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled != self.enabled {
            info!(enabled, "Player rig toggled");
        }
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the player is giving movement input
    pub fn is_moving(&self) -> bool {
        self.locomotion.is_moving()
    }

    pub fn body_yaw(&self) -> f32 {
        self.body_yaw
    }

    /// Body position and heading
    pub fn body_transform(&self) -> Transform {
        Transform::from_position_rotation(
            self.mover.position(),
            Transform::yaw_rotation(self.body_yaw),
        )
    }

    /// Camera world transform
    pub fn camera_transform(&self) -> Transform {
        self.pose
            .world_transform(&self.body_transform(), &self.holder)
    }

    /// View matrix for rendering
    pub fn view_matrix(&self) -> Mat4 {
        self.pose.view_matrix(&self.body_transform(), &self.holder)
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn mover(&self) -> &M {
        &self.mover
    }

    pub fn locomotion(&self) -> &LocomotionController {
        &self.locomotion
    }

    pub fn rotator(&self) -> &CameraRotator {
        &self.rotator
    }

    pub fn bobber(&self) -> &CameraBobber {
        &self.bobber
    }
}

/// Assembles a [`PlayerRig`]; fails if any binding is missing
pub struct PlayerRigBuilder<M: PhysicsMover> {
    config: PlayerConfig,
    mover: Option<M>,
    holder: Option<CameraHolder>,
    camera_local_position: Option<Vec3>,
    body_yaw: f32,
}

impl<M: PhysicsMover> PlayerRigBuilder<M> {
    pub fn new() -> Self {
        Self {
            config: PlayerConfig::default(),
            mover: None,
            holder: None,
            camera_local_position: None,
            body_yaw: 0.0,
        }
    }

    pub fn config(mut self, config: PlayerConfig) -> Self {
        self.config = config;
        self
    }

    /// Bind the mover that carries the body
    pub fn mover(mut self, mover: M) -> Self {
        self.mover = Some(mover);
        self
    }

    /// Bind the camera holder
    pub fn camera_holder(mut self, holder: CameraHolder) -> Self {
        self.holder = Some(holder);
        self
    }

    /// Bind the camera at its rest position relative to the holder
    pub fn camera(mut self, local_position: Vec3) -> Self {
        self.camera_local_position = Some(local_position);
        self
    }

    /// Initial body heading in degrees
    pub fn body_yaw(mut self, degrees: f32) -> Self {
        self.body_yaw = degrees;
        self
    }

    pub fn build(self) -> Result<PlayerRig<M>, RigError> {
        let mover = self
            .mover
            .ok_or(RigError::MissingDependency("physics mover"))?;
        let holder = self
            .holder
            .ok_or(RigError::MissingDependency("camera holder"))?;
        let camera = self
            .camera_local_position
            .ok_or(RigError::MissingDependency("camera"))?;

        let PlayerConfig {
            movement,
            look,
            headbob,
        } = self.config;

        info!(
            position = ?mover.position(),
            eye_height = holder.local_position.y,
            headbob = headbob.enabled,
            "Player rig ready"
        );

        Ok(PlayerRig {
            mover,
            locomotion: LocomotionController::new(movement),
            rotator: CameraRotator::new(look),
            bobber: CameraBobber::new(headbob, camera),
            holder,
            pose: CameraPose::new(camera),
            body_yaw: self.body_yaw,
            enabled: true,
        })
    }
}

impl<M: PhysicsMover> Default for PlayerRigBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}
