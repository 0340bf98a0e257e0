//! Legend of Azure - A top-down arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, projectiles, enemies, collisions)
//! - `renderer`: Read-only frame snapshots and CPU tessellation
//! - `platform`: Clock and input abstraction
//! - `tuning`: Data-driven game balance
//! - `settings`: Runtime settings for the native runner

pub mod error;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use hud::{FpsCounter, Hud};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Target frame rate; one simulation step runs per frame
    pub const TARGET_FPS: u32 = 60;

    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Frames between debug reports
    pub const DEBUG_REPORT_FRAMES: u32 = 60;
    /// Frames per FPS text refresh
    pub const FPS_SAMPLE_FRAMES: u32 = 10;
}

/// Unit vector pointing from `from` toward `to`.
///
/// Colocated points yield the zero vector instead of dividing by zero.
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Straight-line step: `pos + direction * speed`
#[inline]
pub fn step(pos: Vec2, direction: Vec2, speed: f32) -> Vec2 {
    pos + direction * speed
}
