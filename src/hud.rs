//! HUD text and debug reporting
//!
//! Text is produced here; drawing it is up to the render sink.

use crate::consts::{DEBUG_REPORT_FRAMES, FPS_SAMPLE_FRAMES};
use crate::sim::GameState;

/// Shown once the player is dead
pub const DEATH_TEXT: &str = "You Died...";

/// Samples the instantaneous frame rate every `FPS_SAMPLE_FRAMES` frames
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame of `dt` seconds. Returns the new reading when the
    /// sample window closes.
    pub fn record(&mut self, dt: f32) -> Option<u32> {
        self.frames += 1;
        if self.frames < FPS_SAMPLE_FRAMES {
            return None;
        }
        self.frames = 0;
        self.fps = if dt > 0.0 { (1.0 / dt) as u32 } else { 0 };
        Some(self.fps)
    }

    /// Latest sampled reading
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// HUD state carried across frames
#[derive(Debug, Clone, Default)]
pub struct Hud {
    debug: bool,
    show_fps: bool,
    fps: FpsCounter,
    fps_text: String,
    report_frames: u32,
}

impl Hud {
    pub fn new(show_fps: bool) -> Self {
        Self {
            show_fps,
            ..Default::default()
        }
    }

    /// Switch debug mode on (there is no switch off). Returns true the first time.
    pub fn enable_debug(&mut self) -> bool {
        if self.debug {
            return false;
        }
        log::info!("Entering debug.");
        self.debug = true;
        true
    }

    /// Per-frame update after the simulation step
    pub fn update(&mut self, state: &GameState, dt: f32) {
        if let Some(fps) = self.fps.record(dt) {
            self.fps_text = format!("FPS: {} | Health: {}", fps, state.player.health);
        }

        self.report_frames += 1;
        if self.report_frames == DEBUG_REPORT_FRAMES {
            self.report_frames = 0;
            if self.debug {
                log::info!(
                    "Player X: {} | Y: {}",
                    state.player.pos.x,
                    state.player.pos.y
                );
                log::info!("firedt: {}", state.fire.counter());
                log::info!("Player Health: {}", state.player.health);
            }
        }
    }

    pub fn health_text(&self, state: &GameState) -> String {
        format!("Health: {}", state.player.health)
    }

    /// FPS/health line, only while debugging
    pub fn debug_text(&self) -> Option<&str> {
        (self.debug && self.show_fps).then_some(self.fps_text.as_str())
    }
}
