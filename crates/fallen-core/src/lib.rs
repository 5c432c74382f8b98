//! Fallen Core - Core types and utilities for the Fallen Together player system
//!
//! This crate provides the foundational types shared by the other crates:
//! - Mathematical primitives (re-exported from glam)
//! - Transform with a right-handed, Y-up, -Z-forward convention
//! - Frame clock driving the per-tick player pipeline

pub mod time;
pub mod types;

pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
pub use time::{GameTime, TimeConfig};
pub use types::{approx_eq_vec3, Transform};
