//! Per-frame simulation step
//!
//! Stages run in a fixed order and each one completes before the next:
//! input, fire, projectiles, spawn, enemies, collisions, prune, death check.

use glam::Vec2;
use rand::Rng;

use super::autopilot::autopilot_input;
use super::collision::{CollisionReport, resolve_collisions};
use super::state::{GameEvent, GamePhase, GameState, MoveKeys, Owner};
use crate::direction_to;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement keys
    pub keys: MoveKeys,
    /// Sprint modifier held
    pub sprint: bool,
    /// Fire button held
    pub fire: bool,
    /// Aim point in arena coordinates (cursor position)
    pub cursor: Vec2,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one frame and report the frame's collisions.
///
/// `dt` is the wall-clock time since the previous frame in seconds; it only
/// drives the enemy spawn cadence. Everything else moves per frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> CollisionReport {
    if state.phase == GamePhase::Dead {
        return CollisionReport::default();
    }

    state.events.clear();
    state.time_ticks += 1;

    let input = if input.idle_mode {
        autopilot_input(state)
    } else {
        input.clone()
    };

    // 1. Movement
    state
        .player
        .apply_movement(input.keys, input.sprint, &state.tuning.player);
    state.player.clamp_to_bounds(&state.tuning);

    // 2. Fire
    if state.fire.update(input.fire, state.tuning.fire.window_frames) {
        let origin = state.player.pos;
        let dir = direction_to(origin, input.cursor);
        let speed = state.tuning.projectile.player_speed;
        let id = state.spawn_projectile(origin, speed, dir, Owner::Player);
        state.events.push(GameEvent::PlayerFired { id });
    }

    // 3. Projectiles
    let (width, height) = (state.tuning.arena.width, state.tuning.arena.height);
    for projectile in &mut state.projectiles {
        projectile.advance(width, height);
    }

    // 4. Spawn
    spawn_enemies(state, dt);

    // 5. Enemies (their shots join the shared projectile list)
    let (enemies, mut spawner, target, tuning) = state.projectile_spawner();
    let mut fired = Vec::new();
    for enemy in enemies.iter_mut() {
        if enemy.advance(target, tuning, &mut spawner) {
            fired.push(enemy.id);
        }
    }
    state
        .events
        .extend(fired.into_iter().map(|id| GameEvent::EnemyFired { id }));

    // 6. Collisions
    let report = resolve_collisions(state);

    // 7. Prune
    prune(state);

    // 8. Death check
    if state.player.is_dead() {
        state.phase = GamePhase::Dead;
        state.events.push(GameEvent::PlayerDied);
    }

    report
}

/// Spawn one enemy once more than the spawn interval has elapsed, then restart the timer
pub fn spawn_enemies(state: &mut GameState, dt: f32) {
    state.spawn_timer += dt;
    if state.spawn_timer <= state.tuning.enemy.spawn_interval {
        return;
    }

    // Integer pixel column in [0, width - enemy width)
    let span = (state.tuning.arena.width - state.tuning.enemy.size.x) as u32;
    let x = state.rng().random_range(0..span.max(1)) as f32;
    let id = state.spawn_enemy(x);
    state.events.push(GameEvent::EnemySpawned { id });
    state.spawn_timer = 0.0;
}

/// Drop inactive projectiles and removable enemies, keeping id order
pub fn prune(state: &mut GameState) {
    state.projectiles.retain(|p| p.active);
    let tuning = &state.tuning;
    state.enemies.retain(|e| !e.is_removable(tuning));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    const DT: f32 = 1.0 / 60.0;

    fn state() -> GameState {
        GameState::new(12345, Tuning::default())
    }

    #[test]
    fn test_tick_moves_and_clamps_player() {
        let mut state = state();
        let input = TickInput {
            keys: MoveKeys {
                left: true,
                ..Default::default()
            },
            sprint: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.player.pos.x, 391.0);

        for _ in 0..100 {
            tick(&mut state, &input, DT);
        }
        assert_eq!(state.player.pos.x, 12.0);
    }

    #[test]
    fn test_fire_held_spawns_once_per_window() {
        let mut state = state();
        let input = TickInput {
            fire: true,
            cursor: Vec2::new(400.0, 0.0),
            ..Default::default()
        };
        let mut fired = 0;
        for _ in 0..60 {
            tick(&mut state, &input, DT);
            fired += state
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::PlayerFired { .. }))
                .count();
        }
        assert_eq!(fired, 1);

        tick(&mut state, &input, DT);
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::PlayerFired { .. }))
        );
    }

    #[test]
    fn test_player_shot_aims_at_cursor() {
        let mut state = state();
        let input = TickInput {
            fire: true,
            cursor: Vec2::new(400.0, 0.0),
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        let shot = &state.projectiles[0];
        assert_eq!(shot.owner, Owner::Player);
        assert_eq!(shot.direction, Vec2::new(0.0, -1.0));
        // Spawned at the player centre, then advanced once
        assert_eq!(shot.pos, Vec2::new(400.0, 295.0));
    }

    #[test]
    fn test_spawn_timer_over_interval_spawns_one() {
        let mut state = state();
        state.spawn_timer = 0.9;
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.spawn_timer, 0.0);

        let enemy = &state.enemies[0];
        assert!(enemy.pos.x >= 0.0 && enemy.pos.x < 770.0);
        assert_eq!(enemy.pos.x.fract(), 0.0);
        // Spawned at y=-30 then advanced once
        assert_eq!(enemy.pos.y, -28.0);
    }

    #[test]
    fn test_no_spawn_before_interval() {
        let mut state = state();
        for _ in 0..46 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert!(state.enemies.is_empty());
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_hit_enemy_survives_prune() {
        let mut state = state();
        state.spawn_enemy(100.0);
        state.enemies[0].pos = Vec2::new(100.0, 100.0);
        // Moves 5px right into the enemy's box on the projectile stage
        state.spawn_projectile(Vec2::new(100.0, 110.0), 5.0, Vec2::X, Owner::Player);

        tick(&mut state, &TickInput::default(), DT);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].health, 2);
    }

    #[test]
    fn test_faded_enemy_pruned() {
        let mut state = state();
        state.spawn_enemy(100.0);
        state.enemies[0].kill();
        state.enemies[0].fade_timer = 5;
        tick(&mut state, &TickInput::default(), DT);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_enemy_below_arena_pruned() {
        let mut state = state();
        state.spawn_enemy(100.0);
        state.enemies[0].pos = Vec2::new(100.0, 599.0);
        tick(&mut state, &TickInput::default(), DT);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_out_of_bounds_projectile_pruned() {
        let mut state = state();
        state.spawn_projectile(Vec2::new(2.0, 100.0), 5.0, Vec2::NEG_X, Owner::Player);
        tick(&mut state, &TickInput::default(), DT);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_enemy_shots_kill_player() {
        let mut state = state();
        let hit = |state: &mut GameState| {
            let center = state.player.pos;
            state.spawn_projectile(center, 0.0, Vec2::ZERO, Owner::Enemy);
            tick(state, &TickInput::default(), DT);
        };

        hit(&mut state);
        assert_eq!(state.player.health, 90);
        hit(&mut state);
        hit(&mut state);
        assert_eq!(state.player.health, 70);
        assert!(!state.player.is_dead());
        assert_eq!(state.phase, GamePhase::Running);

        for _ in 0..7 {
            hit(&mut state);
        }
        assert_eq!(state.player.health, 0);
        assert!(state.player.is_dead());
        assert_eq!(state.phase, GamePhase::Dead);
        assert!(state.events.contains(&GameEvent::PlayerDied));
    }

    #[test]
    fn test_dead_is_terminal() {
        let mut state = state();
        state.player.health = 10;
        let center = state.player.pos;
        state.spawn_projectile(center, 0.0, Vec2::ZERO, Owner::Enemy);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Dead);

        let ticks = state.time_ticks;
        let input = TickInput {
            keys: MoveKeys {
                up: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let pos = state.player.pos;
        tick(&mut state, &input, 10.0);
        assert_eq!(state.phase, GamePhase::Dead);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.player.pos, pos);
    }

    #[test]
    fn test_enemy_ram() {
        let mut state = state();
        state.spawn_enemy(0.0);
        // Enemy moves 2px down into the player's box
        state.enemies[0].pos = state.player.pos - Vec2::new(15.0, 40.0);
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.player.health, 90);
        assert_eq!(state.enemies[0].health, 0);
        assert_eq!(state.enemies[0].fade_timer, 255);

        // Fading starts next frame, enemy stays where it died
        let pos = state.enemies[0].pos;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.enemies[0].fade_timer, 250);
        assert_eq!(state.enemies[0].pos, pos);
        assert_eq!(state.player.health, 90);
    }

    #[test]
    fn test_enemy_shot_moves_from_next_frame() {
        let mut state = state();
        state.spawn_enemy(100.0);
        state.enemies[0].pos = Vec2::new(100.0, 100.0);
        state.enemies[0].shoot_timer = 119;

        tick(&mut state, &TickInput::default(), DT);
        let id = state.enemies[0].id;
        assert!(state.events.contains(&GameEvent::EnemyFired { id }));
        assert_eq!(state.projectiles.len(), 1);
        // Emitted at the enemy's top-left after it moved, not yet advanced
        let origin = Vec2::new(100.0, 102.0);
        let shot = &state.projectiles[0];
        assert_eq!(shot.owner, Owner::Enemy);
        assert_eq!(shot.pos, origin);
        let dir = shot.direction;
        assert!((dir - direction_to(origin, state.player.pos)).length() < 1e-6);

        tick(&mut state, &TickInput::default(), DT);
        let moved = state.projectiles[0].pos - origin;
        assert!((moved - dir * 4.0).length() < 1e-4);
    }

    #[test]
    fn test_enemy_shot_collides_on_firing_frame() {
        let mut state = state();
        state.spawn_enemy(0.0);
        // Lands on the player's box after its 2px move, then fires
        state.enemies[0].pos = Vec2::new(395.0, 286.0);
        state.enemies[0].shoot_timer = 119;

        let report = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(
            report,
            CollisionReport {
                enemies_hit: 0,
                player_hits: 1,
                rams: 1
            }
        );
        assert!(state.events.contains(&GameEvent::PlayerHit { health: 90 }));
        assert_eq!(state.player.health, 80);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_dead_tick_reports_nothing() {
        let mut state = state();
        state.phase = GamePhase::Dead;
        let center = state.player.pos;
        state.spawn_projectile(center, 0.0, Vec2::ZERO, Owner::Enemy);
        let report = tick(&mut state, &TickInput::default(), DT);
        assert_eq!(report, CollisionReport::default());
        assert_eq!(state.player.health, 100);
    }

    #[test]
    fn test_ids_stay_sorted() {
        let mut state = state();
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..600 {
            tick(&mut state, &input, DT);
        }
        assert!(state.projectiles.windows(2).all(|w| w[0].id < w[1].id));
        assert!(state.enemies.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, Tuning::default());
        let mut state2 = GameState::new(99999, Tuning::default());
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };

        for _ in 0..300 {
            tick(&mut state1, &input, DT);
            tick(&mut state2, &input, DT);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.enemies.len(), state2.enemies.len());
        assert_eq!(state1.projectiles.len(), state2.projectiles.len());
        assert_eq!(state1.player.pos, state2.player.pos);
        assert_eq!(state1.player.health, state2.player.health);
        for (a, b) in state1.enemies.iter().zip(&state2.enemies) {
            assert_eq!(a.pos, b.pos);
        }
    }
}
