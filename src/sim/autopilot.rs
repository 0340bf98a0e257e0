//! Idle/demo mode input
//!
//! Plays the game from the current state: hold fire aimed at the nearest
//! live enemy, sidestep enemy shots and enemies closing in, otherwise drift
//! under the target along a fixed firing line.

use glam::Vec2;

use super::state::{GameState, MoveKeys, Owner};
use super::tick::TickInput;

/// Enemy shots closer than this trigger a dodge
const DODGE_RADIUS: f32 = 90.0;
/// Enemies this close are steered away from instead of tracked
const CONTACT_RADIUS: f32 = 70.0;
/// Fraction of the arena height the player holds while tracking
const FIRING_LINE: f32 = 0.75;

pub fn autopilot_input(state: &GameState) -> TickInput {
    let tuning = &state.tuning;
    let player = state.player.pos;
    let deadzone = tuning.player.base_speed;

    let target = state
        .enemies
        .iter()
        .filter(|e| e.is_alive())
        .map(|e| e.bounds(tuning.enemy.size).center())
        .min_by(|a, b| {
            a.distance_squared(player)
                .partial_cmp(&b.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    // Closest incoming shot or body, whichever is nearer
    let threat = state
        .projectiles
        .iter()
        .filter(|p| p.active && p.owner == Owner::Enemy)
        .map(|p| p.bounds(tuning.projectile.size).center())
        .filter(|c| c.distance(player) < DODGE_RADIUS)
        .chain(target.filter(|c| c.distance(player) < CONTACT_RADIUS))
        .min_by(|a, b| {
            a.distance_squared(player)
                .partial_cmp(&b.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let mut keys = MoveKeys::default();
    let mut sprint = false;

    if let Some(threat) = threat {
        let away = player - threat;
        // Sidestep horizontally; pick a side when dead centre
        if away.x >= 0.0 {
            keys.right = true;
        } else {
            keys.left = true;
        }
        if away.y > 0.0 {
            keys.down = true;
        }
        // Walls: flip to the open side
        let left_wall = tuning.player.inset_left + deadzone;
        let right_wall = tuning.arena.width - tuning.player.inset_right - deadzone;
        if keys.left && player.x <= left_wall {
            keys.left = false;
            keys.right = true;
        } else if keys.right && player.x >= right_wall {
            keys.right = false;
            keys.left = true;
        }
        sprint = true;
    } else {
        let home_y = tuning.arena.height * FIRING_LINE;
        let goal_x = target.map(|t| t.x).unwrap_or(tuning.arena.width / 2.0);
        keys.left = goal_x < player.x - deadzone;
        keys.right = goal_x > player.x + deadzone;
        keys.up = home_y < player.y - deadzone;
        keys.down = home_y > player.y + deadzone;
    }

    TickInput {
        keys,
        sprint,
        fire: target.is_some(),
        cursor: target.unwrap_or(Vec2::new(player.x, 0.0)),
        idle_mode: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_idle_without_enemies_heads_for_firing_line() {
        let state = GameState::new(1, Tuning::default());
        let input = autopilot_input(&state);
        assert!(!input.fire);
        assert!(input.keys.down);
        assert!(!input.keys.left && !input.keys.right);
    }

    #[test]
    fn test_tracks_and_fires_at_enemy() {
        let mut state = GameState::new(1, Tuning::default());
        state.spawn_enemy(100.0);
        state.enemies[0].pos = Vec2::new(100.0, 50.0);
        let input = autopilot_input(&state);
        assert!(input.fire);
        assert_eq!(input.cursor, Vec2::new(115.0, 65.0));
        assert!(input.keys.left);
        assert!(!input.sprint);
    }

    #[test]
    fn test_dodges_enemy_shot() {
        let mut state = GameState::new(1, Tuning::default());
        let pos = state.player.pos + Vec2::new(20.0, -40.0);
        state.spawn_projectile(pos, 4.0, Vec2::Y, Owner::Enemy);
        let input = autopilot_input(&state);
        assert!(input.sprint);
        assert!(input.keys.left);
        assert!(!input.keys.right);
    }

    #[test]
    fn test_dodge_flips_at_wall() {
        let mut state = GameState::new(1, Tuning::default());
        state.player.pos = Vec2::new(12.0, 300.0);
        let pos = state.player.pos + Vec2::new(10.0, -40.0);
        state.spawn_projectile(pos, 4.0, Vec2::Y, Owner::Enemy);
        let input = autopilot_input(&state);
        assert!(input.keys.right);
        assert!(!input.keys.left);
    }
}
