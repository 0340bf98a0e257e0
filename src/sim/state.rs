//! Game state and core simulation types
//!
//! Everything that changes from frame to frame lives in `GameState`; there
//! are no process-wide globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::{Rect, point_outside};
use crate::tuning::{EnemyTuning, PlayerTuning, Tuning};
use crate::{direction_to, step};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player health reached zero. Terminal: there is no way back to Running.
    Dead,
}

/// Who fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

/// Something that happened during a tick (for logging, audio, effects)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerFired { id: u32 },
    EnemySpawned { id: u32 },
    EnemyFired { id: u32 },
    /// Player shot landed; `health` is what the enemy has left
    EnemyHit { id: u32, health: i32 },
    /// Enemy health reached zero from player fire
    EnemyKilled { id: u32 },
    /// Enemy shot landed; `health` is what the player has left
    PlayerHit { health: i32 },
    /// Enemy touched the player and died
    EnemyRammed { id: u32 },
    PlayerDied,
}

/// A projectile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    /// Top-left corner of the hitbox
    pub pos: Vec2,
    /// Unit length or zero
    pub direction: Vec2,
    /// Pixels per frame
    pub speed: f32,
    pub owner: Owner,
    /// Cleared once, when the projectile leaves the arena or hits something
    pub active: bool,
}

impl Projectile {
    /// Create an active projectile. `direction` must already be normalized;
    /// a zero direction gives a stationary projectile.
    pub fn spawn(id: u32, pos: Vec2, speed: f32, direction: Vec2, owner: Owner) -> Self {
        Self {
            id,
            pos,
            direction,
            speed,
            owner,
            active: true,
        }
    }

    /// Move one frame and deactivate if the new position is out of the arena.
    /// No-op once inactive.
    pub fn advance(&mut self, width: f32, height: f32) {
        if !self.active {
            return;
        }
        self.pos = step(self.pos, self.direction, self.speed);
        if point_outside(self.pos, width, height) {
            self.active = false;
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn bounds(&self, size: Vec2) -> Rect {
        Rect::new(self.pos, size)
    }
}

/// Receives projectiles emitted by entities during their update
pub trait ProjectileSink {
    fn emit(&mut self, pos: Vec2, speed: f32, direction: Vec2, owner: Owner) -> u32;
}

/// An enemy entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    /// Top-left corner of the hitbox
    pub pos: Vec2,
    pub direction: Vec2,
    pub speed: f32,
    pub health: i32,
    /// Frames since the last shot (alive only)
    pub shoot_timer: u32,
    /// Remaining alpha after death; removal once it hits zero
    pub fade_timer: i32,
}

impl Enemy {
    pub fn spawn(id: u32, pos: Vec2, speed: f32, direction: Vec2, tuning: &EnemyTuning) -> Self {
        Self {
            id,
            pos,
            direction,
            speed,
            health: tuning.health,
            shoot_timer: 0,
            fade_timer: tuning.fade_start,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Advance one frame.
    ///
    /// Alive: move, count toward the next shot and emit one aimed at `target`
    /// when the interval is reached. Dead: stay put and fade.
    /// Returns true if a shot was emitted.
    pub fn advance(&mut self, target: Vec2, tuning: &Tuning, sink: &mut impl ProjectileSink) -> bool {
        if !self.is_alive() {
            if self.fade_timer > 0 {
                self.fade_timer = (self.fade_timer - tuning.enemy.fade_step).max(0);
            }
            return false;
        }

        self.pos = step(self.pos, self.direction, self.speed);
        self.shoot_timer += 1;
        if self.shoot_timer >= tuning.enemy.shoot_interval {
            let dir = direction_to(self.pos, target);
            sink.emit(self.pos, tuning.projectile.enemy_speed, dir, Owner::Enemy);
            self.shoot_timer = 0;
            return true;
        }
        false
    }

    /// Take one point of damage. No-op once dead.
    pub fn apply_hit(&mut self) {
        if self.is_alive() {
            self.health -= 1;
        }
    }

    /// Drop health to zero; fading starts on the next advance
    pub fn kill(&mut self) {
        self.health = 0;
    }

    /// Dead and fully faded, or alive and entirely outside the arena
    pub fn is_removable(&self, tuning: &Tuning) -> bool {
        if self.is_alive() {
            self.bounds(tuning.enemy.size)
                .is_outside(tuning.arena.width, tuning.arena.height)
        } else {
            self.fade_timer <= 0
        }
    }

    /// Display alpha (presentation only)
    pub fn opacity(&self) -> u8 {
        if self.is_alive() {
            255
        } else {
            self.fade_timer.clamp(0, 255) as u8
        }
    }

    pub fn bounds(&self, size: Vec2) -> Rect {
        Rect::new(self.pos, size)
    }
}

/// Held movement keys for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Centre of the sprite
    pub pos: Vec2,
    pub health: i32,
    pub sprinting: bool,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &PlayerTuning) -> Self {
        Self {
            pos,
            health: tuning.health,
            sprinting: false,
        }
    }

    /// Offset by base speed (plus sprint bonus) for each held key.
    ///
    /// Axes are independent: diagonal input is not normalized and moves
    /// faster than a single direction.
    pub fn apply_movement(&mut self, keys: MoveKeys, sprint: bool, tuning: &PlayerTuning) {
        self.sprinting = sprint;
        let speed = if sprint {
            tuning.base_speed + tuning.sprint_bonus
        } else {
            tuning.base_speed
        };

        if keys.left {
            self.pos.x -= speed;
        }
        if keys.right {
            self.pos.x += speed;
        }
        if keys.up {
            self.pos.y -= speed;
        }
        if keys.down {
            self.pos.y += speed;
        }
    }

    /// Keep the sprite inside the arena's inset rectangle
    pub fn clamp_to_bounds(&mut self, tuning: &Tuning) {
        let p = &tuning.player;
        let min = Vec2::new(p.inset_left, p.inset_top);
        let max = Vec2::new(
            tuning.arena.width - p.inset_right,
            tuning.arena.height - p.inset_bottom,
        );
        self.pos = self.pos.max(min).min(max);
    }

    /// Health may go negative here; only `is_dead` interprets it
    pub fn apply_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn bounds(&self, size: Vec2) -> Rect {
        Rect::centered(self.pos, size)
    }
}

/// Player fire cooldown.
///
/// A counter wraps every `window` frames. Pressing fire while armed shoots,
/// disarms and restarts the counter; the wrap re-arms. Holding fire therefore
/// shoots once per window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FireControl {
    counter: u32,
    triggered: bool,
}

impl FireControl {
    /// Advance one frame; returns true if a shot should be fired this frame
    pub fn update(&mut self, fire_held: bool, window: u32) -> bool {
        let fire = fire_held && !self.triggered;
        if fire {
            self.triggered = true;
            self.counter = 0;
        }
        self.counter = (self.counter + 1) % window;
        if self.counter == 0 {
            self.triggered = false;
        }
        fire
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn is_armed(&self) -> bool {
        !self.triggered
    }
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Live projectiles, in id order
    pub projectiles: Vec<Projectile>,
    /// Live enemies, in id order
    pub enemies: Vec<Enemy>,
    pub fire: FireControl,
    /// Seconds since the last enemy spawn
    pub spawn_timer: f32,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(tuning.arena_center(), &tuning.player),
            tuning,
            phase: GamePhase::Running,
            time_ticks: 0,
            projectiles: Vec::new(),
            enemies: Vec::new(),
            fire: FireControl::default(),
            spawn_timer: 0.0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Add a projectile and return its id
    pub fn spawn_projectile(&mut self, pos: Vec2, speed: f32, direction: Vec2, owner: Owner) -> u32 {
        let id = self.next_entity_id();
        self.projectiles
            .push(Projectile::spawn(id, pos, speed, direction, owner));
        id
    }

    /// Add a downward-moving enemy at `x`, just above the top edge
    pub fn spawn_enemy(&mut self, x: f32) -> u32 {
        let id = self.next_entity_id();
        let tuning = &self.tuning.enemy;
        self.enemies.push(Enemy::spawn(
            id,
            Vec2::new(x, tuning.spawn_y),
            tuning.speed,
            Vec2::Y,
            tuning,
        ));
        id
    }

    /// Split borrow handed to enemies so their shots land in `projectiles`
    pub(crate) fn projectile_spawner(&mut self) -> (&mut Vec<Enemy>, Spawner<'_>, Vec2, &Tuning) {
        (
            &mut self.enemies,
            Spawner {
                projectiles: &mut self.projectiles,
                next_id: &mut self.next_id,
            },
            self.player.pos,
            &self.tuning,
        )
    }

    pub fn is_dead(&self) -> bool {
        self.phase == GamePhase::Dead
    }
}

/// Sink that allocates ids from the game state and appends to its projectile list
pub(crate) struct Spawner<'a> {
    projectiles: &'a mut Vec<Projectile>,
    next_id: &'a mut u32,
}

impl ProjectileSink for Spawner<'_> {
    fn emit(&mut self, pos: Vec2, speed: f32, direction: Vec2, owner: Owner) -> u32 {
        let id = *self.next_id;
        *self.next_id += 1;
        self.projectiles
            .push(Projectile::spawn(id, pos, speed, direction, owner));
        id
    }
}
