//! Data-driven game balance
//!
//! Keep this separate from runtime settings (frame rate, death delay, etc.).
//! Every field has a default, so a tuning file only needs the values it changes.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::error::ConfigError;

/// Arena size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

/// Gameplay tuning for the player avatar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Pixels per frame per held direction.
    pub base_speed: f32,
    /// Extra pixels per frame while sprint is held.
    pub sprint_bonus: f32,
    pub health: i32,
    /// Health lost per enemy shot.
    pub hit_damage: i32,
    /// Hitbox size, centred on the player position.
    pub size: Vec2,
    /// Clamp insets from the arena edges (sprite extent, not hitbox).
    pub inset_left: f32,
    pub inset_top: f32,
    pub inset_right: f32,
    pub inset_bottom: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            base_speed: 5.0,
            sprint_bonus: 4.0,
            health: 100,
            hit_damage: 10,
            size: Vec2::new(24.0, 48.0),
            inset_left: 12.0,
            inset_top: 27.0,
            inset_right: 10.0,
            inset_bottom: 20.0,
        }
    }
}

/// Gameplay tuning for projectiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub size: Vec2,
    /// Pixels per frame for player shots.
    pub player_speed: f32,
    /// Pixels per frame for enemy shots.
    pub enemy_speed: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            size: Vec2::new(10.0, 5.0),
            player_speed: 5.0,
            enemy_speed: 4.0,
        }
    }
}

/// Player fire cooldown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireTuning {
    /// Frame counter wraps at this value and re-arms the trigger.
    pub window_frames: u32,
}

impl Default for FireTuning {
    fn default() -> Self {
        Self { window_frames: 60 }
    }
}

/// Gameplay tuning for enemies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub size: Vec2,
    /// Pixels per frame, straight down.
    pub speed: f32,
    pub health: i32,
    /// Advances between shots.
    pub shoot_interval: u32,
    /// Starting alpha once dead.
    pub fade_start: i32,
    /// Alpha lost per frame while fading.
    pub fade_step: i32,
    /// Seconds between spawns.
    pub spawn_interval: f32,
    /// Spawn height (above the top edge).
    pub spawn_y: f32,
    /// Health the player loses on direct contact.
    pub contact_damage: i32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            size: Vec2::new(30.0, 30.0),
            speed: 2.0,
            health: 3,
            shoot_interval: 120,
            fade_start: 255,
            fade_step: 5,
            spawn_interval: 0.77777,
            spawn_y: -30.0,
            contact_damage: 10,
        }
    }
}

/// All gameplay constants
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena: ArenaTuning,
    pub player: PlayerTuning,
    pub projectile: ProjectileTuning,
    pub fire: FireTuning,
    pub enemy: EnemyTuning,
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: None,
            source,
        })?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning: Tuning = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })?;
        tuning.validate()?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.arena.width <= 0.0 || self.arena.height <= 0.0 {
            return invalid("arena dimensions must be positive");
        }
        // Spawn x is drawn from [0, width - enemy width)
        if self.arena.width - self.enemy.size.x < 1.0 {
            return invalid("arena must be wider than an enemy");
        }
        if self.player.size.min_element() <= 0.0
            || self.enemy.size.min_element() <= 0.0
            || self.projectile.size.min_element() <= 0.0
        {
            return invalid("entity sizes must be positive");
        }
        if self.player.inset_left + self.player.inset_right > self.arena.width
            || self.player.inset_top + self.player.inset_bottom > self.arena.height
        {
            return invalid("player clamp insets exceed the arena");
        }
        if self.enemy.health <= 0 || self.player.health <= 0 {
            return invalid("starting health must be positive");
        }
        if self.enemy.fade_step <= 0 {
            return invalid("enemy fade step must be positive");
        }
        if self.enemy.shoot_interval == 0 {
            return invalid("enemy shoot interval must be non-zero");
        }
        if self.fire.window_frames == 0 {
            return invalid("fire window must be non-zero");
        }
        if self.enemy.spawn_interval <= 0.0 {
            return invalid("spawn interval must be positive");
        }
        Ok(())
    }

    /// Arena centre, where the player starts
    pub fn arena_center(&self) -> Vec2 {
        Vec2::new(self.arena.width / 2.0, self.arena.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "enemy": { "speed": 3.5 } }"#).unwrap();
        assert_eq!(tuning.enemy.speed, 3.5);
        assert_eq!(tuning.enemy.health, 3);
        assert_eq!(tuning.arena.width, 800.0);
        assert_eq!(tuning.player.base_speed, 5.0);
    }

    #[test]
    fn test_narrow_arena_rejected() {
        let result = Tuning::from_json(r#"{ "arena": { "width": 30.0 } }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_fade_step_rejected() {
        let result = Tuning::from_json(r#"{ "enemy": { "fade_step": 0 } }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = Tuning::from_json("{ arena: ");
        assert!(matches!(result, Err(ConfigError::Parse { path: None, .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = Tuning::load("/nonexistent/tuning.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
