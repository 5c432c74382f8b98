//! Input system with action-based mapping
//!
//! Raw window events are folded into an [`InputState`]; once per tick the
//! handler condenses that state into an immutable [`InputFrame`], which is
//! the only thing the player pipeline ever reads.

use std::collections::{HashMap, HashSet};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Move forward (W by default)
    MoveForward,
    /// Move backward (S by default)
    MoveBackward,
    /// Move left (A by default)
    MoveLeft,
    /// Move right (D by default)
    MoveRight,
    /// Jump (Space by default)
    Jump,
    /// Sprint modifier (Shift by default)
    Sprint,
}

/// Per-tick input snapshot consumed by the player rig.
///
/// `look_axis.y` is positive when the mouse moves up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    /// Strafe (x) and forward (y) axis, each in [-1, 1]
    pub move_axis: Vec2,
    /// Mouse delta for this tick
    pub look_axis: Vec2,
    /// Jump was pressed since the previous frame
    pub jump_triggered: bool,
    /// Sprint is held down
    pub sprint_held: bool,
}

impl InputFrame {
    /// Whether any movement input is present
    pub fn is_moving(&self) -> bool {
        self.move_axis.x != 0.0 || self.move_axis.y != 0.0
    }
}

/// Current state of all inputs for a frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Actions currently held down
    pub held: HashSet<InputAction>,
    /// Actions that were just pressed this frame
    pub just_pressed: HashSet<InputAction>,
    /// Mouse movement accumulated this frame (positive y is up)
    pub look_delta: Vec2,
}

impl InputState {
    /// Create a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn is_just_pressed(&self, action: InputAction) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Composite movement axis from the four directional actions.
    ///
    /// Diagonals are normalized to unit length.
    pub fn move_axis(&self) -> Vec2 {
        let axis = |positive, negative| {
            let p = if self.is_held(positive) { 1.0 } else { 0.0 };
            let n = if self.is_held(negative) { 1.0 } else { 0.0 };
            p - n
        };
        Vec2::new(
            axis(InputAction::MoveRight, InputAction::MoveLeft),
            axis(InputAction::MoveForward, InputAction::MoveBackward),
        )
        .normalize_or_zero()
    }

    /// Clear frame-specific data (call at end of frame)
    pub fn clear_frame(&mut self) {
        self.just_pressed.clear();
        self.look_delta = Vec2::ZERO;
    }

    /// Clear all input state
    pub fn clear_all(&mut self) {
        self.held.clear();
        self.clear_frame();
    }
}

/// Maps physical keys to game actions
#[derive(Debug, Clone)]
pub struct InputBindings {
    /// Key to action mappings
    bindings: HashMap<KeyCode, InputAction>,
    /// Reverse lookup: action to all keys
    reverse: HashMap<InputAction, Vec<KeyCode>>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
            reverse: HashMap::new(),
        };

        // Default WASD bindings
        bindings.bind(KeyCode::KeyW, InputAction::MoveForward);
        bindings.bind(KeyCode::KeyS, InputAction::MoveBackward);
        bindings.bind(KeyCode::KeyA, InputAction::MoveLeft);
        bindings.bind(KeyCode::KeyD, InputAction::MoveRight);

        // Arrow keys as alternative
        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);
        bindings.bind(KeyCode::ArrowDown, InputAction::MoveBackward);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);

        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::ShiftLeft, InputAction::Sprint);
        bindings.bind(KeyCode::ShiftRight, InputAction::Sprint);

        bindings
    }
}

impl InputBindings {
    /// Create new input bindings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a key to an action, replacing any previous binding of that key
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.unbind(key);
        self.bindings.insert(key, action);
        self.reverse.entry(action).or_default().push(key);
    }

    /// Unbind a key
    pub fn unbind(&mut self, key: KeyCode) {
        if let Some(action) = self.bindings.remove(&key) {
            if let Some(keys) = self.reverse.get_mut(&action) {
                keys.retain(|k| *k != key);
            }
        }
    }

    /// Get the action for a key, if any
    pub fn get_key_action(&self, key: KeyCode) -> Option<InputAction> {
        self.bindings.get(&key).copied()
    }

    /// All keys bound to an action
    pub fn keys_for(&self, action: InputAction) -> &[KeyCode] {
        self.reverse.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Input handler that processes raw events and produces per-tick frames
#[derive(Debug)]
pub struct InputHandler {
    /// Current input state
    pub state: InputState,
    /// Input bindings
    pub bindings: InputBindings,
    /// Invert Y axis
    pub invert_y: bool,
    /// Whether events are being sampled
    enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Create a new, enabled input handler with default bindings
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            bindings: InputBindings::default(),
            invert_y: false,
            enabled: true,
        }
    }

    /// Start sampling input
    pub fn enable(&mut self) {
        if !self.enabled {
            debug!("Input enabled");
        }
        self.enabled = true;
    }

    /// Stop sampling input and release everything currently held
    pub fn disable(&mut self) {
        if self.enabled {
            debug!("Input disabled");
        }
        self.enabled = false;
        self.state.clear_all();
    }

    /// Whether input is being sampled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Handle a keyboard event
    pub fn handle_keyboard(&mut self, physical_key: PhysicalKey, element_state: ElementState) {
        if !self.enabled {
            return;
        }
        let PhysicalKey::Code(key_code) = physical_key else {
            return;
        };
        let Some(action) = self.bindings.get_key_action(key_code) else {
            return;
        };

        match element_state {
            ElementState::Pressed => {
                if !self.state.held.contains(&action) {
                    self.state.just_pressed.insert(action);
                }
                self.state.held.insert(action);
            }
            ElementState::Released => {
                self.state.held.remove(&action);
            }
        }
    }

    /// Handle raw mouse motion (window convention: positive y is down)
    pub fn handle_mouse_motion(&mut self, delta: (f64, f64)) {
        if !self.enabled {
            return;
        }
        let y_mult = if self.invert_y { 1.0 } else { -1.0 };
        self.state.look_delta += Vec2::new(delta.0 as f32, delta.1 as f32 * y_mult);
    }

    /// Snapshot the current state for this tick
    pub fn frame(&self) -> InputFrame {
        if !self.enabled {
            return InputFrame::default();
        }
        InputFrame {
            move_axis: self.state.move_axis(),
            look_axis: self.state.look_delta,
            jump_triggered: self.state.is_just_pressed(InputAction::Jump),
            sprint_held: self.state.is_held(InputAction::Sprint),
        }
    }

    /// Clear frame-specific input data
    pub fn end_frame(&mut self) {
        self.state.clear_frame();
    }
}
