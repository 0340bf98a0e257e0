//! Platform abstraction layer
//!
//! Handles the services the simulation reads from but does not own:
//! - Time (monotonic frame clock, frame cap)
//! - Input (held keys, fire, cursor)

use std::time::{Duration, Instant};

use crate::sim::TickInput;

/// Monotonic time source read once per frame
pub trait Clock {
    /// Seconds since the previous call (or since creation), restarting the count
    fn restart(&mut self) -> f32;
}

/// Wall-clock implementation backed by `Instant`
#[derive(Debug)]
pub struct MonotonicClock {
    last: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn restart(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed.as_secs_f32()
    }
}

/// Clock that reports the same step every frame
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub step: f32,
}

impl Clock for FixedClock {
    fn restart(&mut self) -> f32 {
        self.step
    }
}

/// Sleeps out the remainder of each frame to hold a frame-rate cap
#[derive(Debug)]
pub struct FrameLimiter {
    frame: Duration,
    frame_start: Instant,
}

impl FrameLimiter {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / frame_rate.max(1) as f64),
            frame_start: Instant::now(),
        }
    }

    /// Block until the current frame's budget is used up, then start the next
    pub fn wait(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.frame {
            std::thread::sleep(self.frame - elapsed);
        }
        self.frame_start = Instant::now();
    }
}

/// Per-frame input snapshot
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    pub tick: TickInput,
    /// Debug key held
    pub debug: bool,
    /// Window close / quit requested
    pub quit: bool,
}

/// Source of held-key input, polled once per frame
pub trait InputSource {
    fn poll(&mut self) -> InputFrame;
}

/// Input for unattended runs: hands control to the autopilot
#[derive(Debug, Clone, Default)]
pub struct DemoInput {
    debug: bool,
}

impl DemoInput {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }
}

impl InputSource for DemoInput {
    fn poll(&mut self) -> InputFrame {
        InputFrame {
            tick: TickInput {
                idle_mode: true,
                ..Default::default()
            },
            debug: self.debug,
            quit: false,
        }
    }
}

/// Replays a fixed input sequence, then repeats the last frame
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    frames: Vec<InputFrame>,
    next: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<InputFrame>) -> Self {
        Self { frames, next: 0 }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputFrame {
        let frame = self
            .frames
            .get(self.next)
            .or_else(|| self.frames.last())
            .cloned()
            .unwrap_or_default();
        self.next += 1;
        frame
    }
}
