//! Axis-aligned rectangle geometry for hitboxes
//!
//! A rectangle is stored as its top-left corner plus size, in screen
//! coordinates (+Y down). Overlap is strict: rectangles that only share an
//! edge do not intersect.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Rectangle of `size` centred on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Strict intersection test (positive-area overlap only)
    pub fn overlaps(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }

    /// True when no part of the rectangle lies inside a `width`×`height` arena
    pub fn is_outside(&self, width: f32, height: f32) -> bool {
        let max = self.max();
        max.x < 0.0 || self.min.x > width || max.y < 0.0 || self.min.y > height
    }
}

/// True if a point lies beyond the arena on any side (edges count as inside)
#[inline]
pub fn point_outside(pos: Vec2, width: f32, height: f32) -> bool {
    pos.x < 0.0 || pos.y < 0.0 || pos.x > width || pos.y > height
}
