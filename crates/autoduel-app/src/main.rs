use std::thread;

use anyhow::Context;
use glam::Vec3;
use tracing::info;

use autoduel_app::config;
use autoduel_app::game_loop::LoopConfig;
use autoduel_app::state::AppState;
use autoduel_core::commands::PlayerCommand;
use autoduel_core::enums::ProjectileKind;
use autoduel_core::tuning::TuningTable;
use autoduel_sim::engine::SimConfig;

/// Vehicles in the demo arena: id, skin, anchor.
const DEMO_ROSTER: [(u32, &str, Vec3); 3] = [
    (1, "auger", Vec3::new(0.0, 0.0, 0.0)),
    (2, "clubKid", Vec3::new(20.0, 0.0, 30.0)),
    (3, "spectre", Vec3::new(-25.0, 0.0, 10.0)),
];

/// Ticks between demo volleys.
const VOLLEY_INTERVAL: u64 = 30;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn load_tuning() -> anyhow::Result<TuningTable> {
    match config::tuning_path() {
        Some(path) => {
            let tuning = TuningTable::load(&path)
                .with_context(|| format!("loading tuning from {}", path.display()))?;
            info!(path = %path.display(), "tuning override loaded");
            Ok(tuning)
        }
        None => Ok(TuningTable::default()),
    }
}

/// Scripted volley: every vehicle shoots at the next one in the roster,
/// alternating machine gun and special attack.
fn volley(state: &AppState, round: u64) -> anyhow::Result<()> {
    let kind = if round % 2 == 0 {
        ProjectileKind::Basic
    } else {
        ProjectileKind::Special
    };
    for (i, (vehicle_id, _, position)) in DEMO_ROSTER.iter().enumerate() {
        let (_, _, target) = DEMO_ROSTER[(i + 1) % DEMO_ROSTER.len()];
        state.send_command(PlayerCommand::Fire {
            vehicle_id: *vehicle_id,
            kind,
            direction: target - *position,
        })?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let tick_hz = config::tick_hz();
    let loop_config = LoopConfig {
        sim: SimConfig {
            seed: config::seed(),
            tuning: load_tuning()?,
        },
        tick_hz,
    };
    let demo_ticks = config::demo_ticks();

    let state = AppState::new();
    state.start(loop_config)?;

    for (vehicle_id, skin_id, position) in DEMO_ROSTER {
        state.send_command(PlayerCommand::SpawnVehicle {
            vehicle_id,
            skin_id: skin_id.to_string(),
            position,
        })?;
    }
    state.send_command(PlayerCommand::SetHomingTarget { vehicle_id: 2 })?;

    let tick_duration = config::tick_duration(tick_hz);
    for tick in 0..demo_ticks {
        if tick % VOLLEY_INTERVAL == 0 {
            volley(&state, tick / VOLLEY_INTERVAL)?;
        }
        thread::sleep(tick_duration);
    }

    state.shutdown()?;

    if let Some(snapshot) = state.snapshot() {
        info!(
            tick = snapshot.time.tick,
            projectiles = snapshot.projectiles.len(),
            "demo finished"
        );
        let json = serde_json::to_string_pretty(&snapshot).context("serializing snapshot")?;
        println!("{json}");
    }
    Ok(())
}
