//! Shape generation for 2D primitives

use super::snapshot::RenderSnapshot;
use super::vertex::{Vertex, colors};
use crate::sim::{Owner, Rect};

/// Generate vertices for a filled rectangle (two triangles)
pub fn quad(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let min = rect.min;
    let max = rect.max();

    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

pub fn projectile_color(owner: Owner) -> [f32; 4] {
    match owner {
        Owner::Player => colors::PLAYER_BULLET,
        Owner::Enemy => colors::ENEMY_BULLET,
    }
}

pub fn enemy_color(opacity: u8) -> [f32; 4] {
    let mut color = colors::ENEMY;
    color[3] = opacity as f32 / 255.0;
    color
}

/// Tessellate a whole frame: background, projectiles, enemies, then the player.
///
/// Once dead the frame is just the death background.
pub fn frame_vertices(snapshot: &RenderSnapshot, out: &mut Vec<Vertex>) {
    out.clear();

    let screen = Rect::new(glam::Vec2::ZERO, snapshot.arena);
    if snapshot.death_text.is_some() {
        out.extend_from_slice(&quad(&screen, colors::DEATH_BACKGROUND));
        return;
    }

    out.reserve(6 * (2 + snapshot.projectiles.len() + snapshot.enemies.len()));
    out.extend_from_slice(&quad(&screen, colors::BACKGROUND));
    for p in &snapshot.projectiles {
        out.extend_from_slice(&quad(&p.rect, projectile_color(p.owner)));
    }
    for e in &snapshot.enemies {
        out.extend_from_slice(&quad(&e.rect, enemy_color(e.opacity)));
    }
    out.extend_from_slice(&quad(&snapshot.player_rect, colors::PLAYER));
}
