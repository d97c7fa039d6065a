//! Game loop thread: runs the combat engine at a fixed rate and publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Snapshots are stored in shared state
//! for polling and their events are logged.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Instant;

use tracing::{debug, info};

use autoduel_core::constants::TICK_RATE;
use autoduel_core::events::ProjectileEvent;
use autoduel_core::state::CombatSnapshot;
use autoduel_sim::clock::SystemClock;
use autoduel_sim::engine::{CombatEngine, SimConfig};

use crate::config;
use crate::state::GameLoopCommand;

/// What the loop thread needs to build its engine.
#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub sim: SimConfig,
    pub tick_hz: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            tick_hz: TICK_RATE,
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: LoopConfig,
    latest_snapshot: Arc<Mutex<Option<CombatSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("autoduel-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: LoopConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<CombatSnapshot>>,
) {
    let tick_duration = config::tick_duration(config.tick_hz);
    let delta = tick_duration.as_secs_f32();
    info!(
        seed = config.sim.seed,
        tick_hz = config.tick_hz,
        "game loop started"
    );

    let mut engine = CombatEngine::new(config.sim, SystemClock::new());
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!(tick = engine.time().tick, "game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick(delta);
        log_events(&snapshot.events);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, reset to avoid catch-up spiral
            debug!(behind = ?(now - next_tick_time), "game loop fell behind");
            next_tick_time = now;
        }
    }
}

fn log_events(events: &[ProjectileEvent]) {
    for event in events {
        match event {
            ProjectileEvent::Fired {
                projectile_id,
                kind,
                shooter_id,
                shape,
            } => info!(projectile_id, ?kind, shooter_id, ?shape, "fired"),
            ProjectileEvent::Expired {
                projectile_id,
                reason,
                distance,
            } => info!(projectile_id, ?reason, distance, "expired"),
        }
    }
}
