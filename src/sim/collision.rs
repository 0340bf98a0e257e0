//! Collision detection and damage
//!
//! Three brute-force passes over the current (post-advance) hitboxes:
//! player shots against enemies, enemy shots against the player, and enemies
//! touching the player. Entity counts stay small, so no spatial partitioning.

use std::ops::AddAssign;

use super::state::{GameEvent, GameState, Owner};

/// Per-pass hit counts from one resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub enemies_hit: u32,
    pub player_hits: u32,
    pub rams: u32,
}

impl AddAssign for CollisionReport {
    fn add_assign(&mut self, other: Self) {
        self.enemies_hit += other.enemies_hit;
        self.player_hits += other.player_hits;
        self.rams += other.rams;
    }
}

/// Apply all collision damage for the frame
pub fn resolve_collisions(state: &mut GameState) -> CollisionReport {
    CollisionReport {
        enemies_hit: player_shots_vs_enemies(state),
        player_hits: enemy_shots_vs_player(state),
        rams: enemies_vs_player(state),
    }
}

/// Each active player shot damages at most one live enemy (first in id order)
pub fn player_shots_vs_enemies(state: &mut GameState) -> u32 {
    let shot_size = state.tuning.projectile.size;
    let enemy_size = state.tuning.enemy.size;
    let mut hits = 0;

    for shot in state
        .projectiles
        .iter_mut()
        .filter(|p| p.active && p.owner == Owner::Player)
    {
        let bounds = shot.bounds(shot_size);
        let Some(enemy) = state
            .enemies
            .iter_mut()
            .find(|e| e.is_alive() && bounds.overlaps(&e.bounds(enemy_size)))
        else {
            continue;
        };

        shot.deactivate();
        enemy.apply_hit();
        hits += 1;

        state.events.push(GameEvent::EnemyHit {
            id: enemy.id,
            health: enemy.health,
        });
        if !enemy.is_alive() {
            state.events.push(GameEvent::EnemyKilled { id: enemy.id });
        }
    }

    hits
}

/// Enemy shots overlapping the player deal hit damage and are consumed
pub fn enemy_shots_vs_player(state: &mut GameState) -> u32 {
    let shot_size = state.tuning.projectile.size;
    let player_bounds = state.player.bounds(state.tuning.player.size);
    let damage = state.tuning.player.hit_damage;
    let mut hits = 0;

    for shot in state
        .projectiles
        .iter_mut()
        .filter(|p| p.active && p.owner == Owner::Enemy)
    {
        if shot.bounds(shot_size).overlaps(&player_bounds) {
            shot.deactivate();
            state.player.apply_damage(damage);
            hits += 1;
            state.events.push(GameEvent::PlayerHit {
                health: state.player.health,
            });
        }
    }

    hits
}

/// Every live enemy touching the player deals contact damage and dies
pub fn enemies_vs_player(state: &mut GameState) -> u32 {
    let enemy_size = state.tuning.enemy.size;
    let player_bounds = state.player.bounds(state.tuning.player.size);
    let damage = state.tuning.enemy.contact_damage;
    let mut rams = 0;

    for enemy in state.enemies.iter_mut().filter(|e| e.is_alive()) {
        if enemy.bounds(enemy_size).overlaps(&player_bounds) {
            state.player.apply_damage(damage);
            enemy.kill();
            rams += 1;
            state.events.push(GameEvent::EnemyRammed { id: enemy.id });
        }
    }

    rams
}
