//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// 8-bit RGBA to normalized float color
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> [f32; 4] {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ]
}

/// Colors for game elements
pub mod colors {
    use super::rgba;

    pub const BACKGROUND: [f32; 4] = rgba(100, 100, 100, 255);
    pub const DEATH_BACKGROUND: [f32; 4] = rgba(0, 0, 0, 255);
    pub const PLAYER: [f32; 4] = rgba(255, 255, 255, 255);
    pub const PLAYER_BULLET: [f32; 4] = rgba(50, 0, 50, 255);
    pub const ENEMY_BULLET: [f32; 4] = rgba(0, 0, 255, 255);
    /// Alpha replaced by the enemy's opacity
    pub const ENEMY: [f32; 4] = rgba(255, 0, 0, 255);
    pub const HEALTH_TEXT: [f32; 4] = rgba(115, 0, 0, 255);
    pub const DEBUG_TEXT: [f32; 4] = rgba(0, 0, 0, 255);
    pub const DEATH_TEXT: [f32; 4] = rgba(255, 0, 0, 255);
}
