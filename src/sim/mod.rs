//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, timed only by the caller-supplied `dt`
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use collision::{CollisionReport, resolve_collisions};
pub use rect::Rect;
pub use state::{
    Enemy, FireControl, GameEvent, GamePhase, GameState, MoveKeys, Owner, Player, Projectile,
    ProjectileSink,
};
pub use tick::{TickInput, prune, spawn_enemies, tick};
