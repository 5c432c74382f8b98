//! Fallen Together - headless player walkthrough
//!
//! Drives the first-person rig through a scripted sequence of key presses
//! and mouse motion on a fixed-step clock and logs the resulting body and
//! camera state. Pass `--flat` to use the flat-ground mover instead of the
//! rapier capsule, and `--write-settings` to save the active settings.

mod settings;

use anyhow::{Context, Result};
use fallen_core::{GameTime, Vec3};
use fallen_physics::{CharacterController, FlatGroundMover, KinematicMover, PhysicsMover, PhysicsWorld};
use fallen_player::{CameraHolder, InputHandler, PlayerRig};
use tracing::info;
use tracing_subscriber::EnvFilter;
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use settings::Settings;

/// One scripted input event
#[derive(Debug, Clone, Copy)]
enum ScriptEvent {
    Press(KeyCode),
    Release(KeyCode),
    /// Raw mouse delta in window convention (positive y is down)
    Mouse(f64, f64),
    /// Pause (true) or resume (false) the game clock
    Pause(bool),
    TimeScale(f32),
}

/// Events with the wall-clock time (seconds) they fire at
const SCRIPT: &[(f64, ScriptEvent)] = &[
    (0.5, ScriptEvent::Press(KeyCode::KeyW)),
    (2.0, ScriptEvent::Press(KeyCode::ShiftLeft)),
    (3.0, ScriptEvent::Press(KeyCode::Space)),
    (3.1, ScriptEvent::Release(KeyCode::Space)),
    (3.5, ScriptEvent::Mouse(20.0, 0.0)),
    (4.5, ScriptEvent::Release(KeyCode::ShiftLeft)),
    (5.0, ScriptEvent::Mouse(0.0, -15.0)),
    (6.0, ScriptEvent::Release(KeyCode::KeyW)),
    (6.5, ScriptEvent::TimeScale(0.5)),
    (7.0, ScriptEvent::Pause(true)),
    (7.5, ScriptEvent::Pause(false)),
];

const DURATION: f64 = 8.0;

/// Seconds between status lines
const REPORT_INTERVAL: f64 = 0.5;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = Settings::load();

    if args.iter().any(|a| a == "--write-settings") {
        let path = settings.save().context("Failed to write settings")?;
        info!("Settings written to {:?}", path);
    }

    let holder = CameraHolder::new(Vec3::new(0.0, 1.6, 0.0));

    if args.iter().any(|a| a == "--flat") {
        info!("Using flat-ground mover");
        let rig = PlayerRig::builder()
            .config(settings.player.clone())
            .mover(FlatGroundMover::on_ground(Vec3::ZERO))
            .camera_holder(holder)
            .camera(Vec3::ZERO)
            .build()?;
        run(rig, &settings)
    } else {
        info!("Using rapier capsule mover");
        let mut world = PhysicsWorld::new();
        world.create_ground(0.0);
        // A low ledge ahead of the spawn point to step over
        world.create_static_box(Vec3::new(2.0, 0.1, 0.5), Vec3::new(0.0, 0.1, -12.0));

        let mover = KinematicMover::spawn(world, CharacterController::new(), Vec3::new(0.0, 0.05, 0.0));
        let rig = PlayerRig::builder()
            .config(settings.player.clone())
            .mover(mover)
            .camera_holder(holder)
            .camera(Vec3::ZERO)
            .build()?;
        run(rig, &settings)
    }
}

fn run<M: PhysicsMover>(mut rig: PlayerRig<M>, settings: &Settings) -> Result<()> {
    let mut time = GameTime::new(settings.time.clone());
    let mut input = InputHandler::new();
    let mut script = SCRIPT.iter().peekable();
    let mut next_report = 0.0;
    let step = time.config.fixed_timestep;
    // Unscaled seconds; keeps running while the game clock is paused or slowed
    let mut elapsed = 0.0;

    while elapsed < DURATION {
        while let Some((_, event)) = script.next_if(|(at, _)| *at <= elapsed) {
            apply(&mut input, &mut time, *event);
        }

        time.update(step);
        elapsed += step as f64;
        for _ in 0..time.fixed_steps() {
            let frame = input.frame();
            rig.tick(&frame, time.config.fixed_timestep);
            input.end_frame();
        }

        if elapsed >= next_report {
            report(&rig, &time);
            next_report += REPORT_INTERVAL;
        }
    }

    info!(frames = time.frame_count, "Walkthrough finished");
    Ok(())
}

fn apply(input: &mut InputHandler, time: &mut GameTime, event: ScriptEvent) {
    match event {
        ScriptEvent::Press(key) => input.handle_keyboard(PhysicalKey::Code(key), ElementState::Pressed),
        ScriptEvent::Release(key) => {
            input.handle_keyboard(PhysicalKey::Code(key), ElementState::Released)
        }
        ScriptEvent::Mouse(dx, dy) => input.handle_mouse_motion((dx, dy)),
        ScriptEvent::Pause(true) => {
            info!("Clock paused");
            time.pause();
        }
        ScriptEvent::Pause(false) => {
            info!("Clock resumed");
            time.resume();
        }
        ScriptEvent::TimeScale(scale) => {
            info!(scale, "Time scale changed");
            time.set_time_scale(scale);
        }
    }
}

fn report<M: PhysicsMover>(rig: &PlayerRig<M>, time: &GameTime) {
    let mover = rig.mover();
    let velocity = mover.velocity();
    let camera = rig.camera_transform();
    info!(
        t = time.total_time,
        paused = time.paused,
        alpha = time.fixed_interpolation(),
        position = ?mover.position(),
        horizontal_speed = Vec3::new(velocity.x, 0.0, velocity.z).length(),
        vertical_velocity = rig.locomotion().motion().vertical_velocity,
        grounded = mover.is_grounded(),
        moving = rig.is_moving(),
        bobbing = rig.bobber().is_bobbing(),
        yaw = rig.body_yaw(),
        pitch = rig.rotator().pitch(),
        camera_offset = ?rig.pose().local_position,
        look = ?camera.forward(),
        "tick"
    );
}
