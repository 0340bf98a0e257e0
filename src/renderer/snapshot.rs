//! Read-only per-frame view of the game for render sinks

use glam::Vec2;
use serde::Serialize;

use super::vertex::colors;
use crate::hud::{DEATH_TEXT, Hud};
use crate::sim::{GameState, Owner, Rect};

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileShape {
    pub id: u32,
    pub rect: Rect,
    pub owner: Owner,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyShape {
    pub id: u32,
    pub rect: Rect,
    /// 0 (invisible) to 255 (opaque)
    pub opacity: u8,
}

/// A text line, its top-left anchor and fill colour
#[derive(Debug, Clone, Serialize)]
pub struct TextLine {
    pub text: String,
    pub pos: Vec2,
    pub color: [f32; 4],
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub frame: u64,
    pub arena: Vec2,
    pub player_pos: Vec2,
    pub player_rect: Rect,
    pub player_alive: bool,
    pub health: i32,
    pub projectiles: Vec<ProjectileShape>,
    pub enemies: Vec<EnemyShape>,
    pub health_text: TextLine,
    pub debug_text: Option<TextLine>,
    /// Death screen text; when set the frame is drawn black with only this
    pub death_text: Option<TextLine>,
}

impl RenderSnapshot {
    /// Capture the state after a completed step
    pub fn capture(state: &GameState, hud: &Hud) -> Self {
        let tuning = &state.tuning;
        let arena = Vec2::new(tuning.arena.width, tuning.arena.height);
        let alive = !state.is_dead();

        Self {
            frame: state.time_ticks,
            arena,
            player_pos: state.player.pos,
            player_rect: state.player.bounds(tuning.player.size),
            player_alive: alive,
            health: state.player.health,
            projectiles: state
                .projectiles
                .iter()
                .filter(|p| p.active)
                .map(|p| ProjectileShape {
                    id: p.id,
                    rect: p.bounds(tuning.projectile.size),
                    owner: p.owner,
                })
                .collect(),
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyShape {
                    id: e.id,
                    rect: e.bounds(tuning.enemy.size),
                    opacity: e.opacity(),
                })
                .collect(),
            health_text: TextLine {
                text: hud.health_text(state),
                pos: Vec2::ZERO,
                color: colors::HEALTH_TEXT,
            },
            debug_text: hud.debug_text().map(|text| TextLine {
                text: text.to_string(),
                pos: Vec2::new(0.0, 30.0),
                color: colors::DEBUG_TEXT,
            }),
            death_text: (!alive).then(|| TextLine {
                text: DEATH_TEXT.to_string(),
                pos: Vec2::new(arena.x / 2.0 - 120.0, arena.y / 2.0),
                color: colors::DEATH_TEXT,
            }),
        }
    }
}
