//! Legend of Azure entry point
//!
//! Native headless runner: reads settings, drives one simulation step per
//! frame at the configured cap, hands each frame to a vertex sink, and exits
//! after the death screen delay (or the frame limit).

use std::process::ExitCode;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use legend_of_azure::hud::Hud;
use legend_of_azure::platform::{
    Clock, DemoInput, FrameLimiter, InputFrame, InputSource, MonotonicClock, ScriptedInput,
};
use legend_of_azure::renderer::{RenderSink, RenderSnapshot, VertexSink};
use legend_of_azure::sim::{CollisionReport, GameEvent, GameState, tick};
use legend_of_azure::{Settings, Tuning};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Legend of Azure starting...");

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let tuning = match settings.tuning_path.as_deref() {
        Some(path) => match Tuning::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };

    let seed = settings.seed.unwrap_or_else(time_seed);
    log::info!("Seed: {seed}");

    let mut input: Box<dyn InputSource> = if settings.demo {
        Box::new(DemoInput::new(settings.debug))
    } else {
        log::warn!("No input device in headless mode, the player will stand still");
        Box::new(ScriptedInput::new(vec![InputFrame {
            debug: settings.debug,
            ..Default::default()
        }]))
    };

    run(&settings, GameState::new(seed, tuning), input.as_mut());
    ExitCode::SUCCESS
}

fn run(settings: &Settings, mut state: GameState, input: &mut dyn InputSource) {
    let mut clock = MonotonicClock::new();
    let mut limiter = FrameLimiter::new(settings.frame_rate);
    let mut hud = Hud::new(settings.show_fps);
    let mut sink = VertexSink::new();
    let mut collisions = CollisionReport::default();

    loop {
        let frame = input.poll();
        if frame.quit {
            log::info!("Quit requested");
            break;
        }
        if frame.debug {
            hud.enable_debug();
        }

        let dt = clock.restart();
        collisions += tick(&mut state, &frame.tick, dt);
        for event in &state.events {
            log_event(event);
        }
        hud.update(&state, dt);

        let snapshot = RenderSnapshot::capture(&state, &hud);
        if log::log_enabled!(log::Level::Trace)
            && let Ok(json) = serde_json::to_string(&snapshot)
        {
            log::trace!("{json}");
        }
        sink.present(&snapshot);

        if state.is_dead() {
            log::info!("Player died!");
            std::thread::sleep(Duration::from_secs_f32(settings.death_delay_secs));
            break;
        }
        if settings.max_frames.is_some_and(|max| state.time_ticks >= max) {
            log::info!("Frame limit reached");
            break;
        }

        limiter.wait();
    }

    log::info!(
        "Run over after {} frames ({} rendered), health {}",
        state.time_ticks,
        sink.frames(),
        state.player.health
    );
    log::info!(
        "Enemies hit {} times, player shot {} times, rammed {} times",
        collisions.enemies_hit,
        collisions.player_hits,
        collisions.rams
    );
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::PlayerFired { id } => log::debug!("player fired #{id}"),
        GameEvent::EnemySpawned { id } => log::debug!("enemy #{id} spawned"),
        GameEvent::EnemyFired { id } => log::debug!("enemy #{id} fired"),
        GameEvent::EnemyHit { id, health } => log::debug!("enemy #{id} hit, health {health}"),
        GameEvent::EnemyKilled { id } => log::debug!("enemy #{id} killed"),
        GameEvent::PlayerHit { health } => log::debug!("player hit, health {health}"),
        GameEvent::EnemyRammed { id } => log::debug!("enemy #{id} rammed the player"),
        GameEvent::PlayerDied => log::debug!("player died"),
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
