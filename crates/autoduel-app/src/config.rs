//! Runtime configuration read from the environment.
//!
//! Every knob has a default, so the binary runs with no environment at all.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use autoduel_core::constants::{DEFAULT_SEED, TICK_RATE};

pub const SEED_VAR: &str = "AUTODUEL_SEED";
pub const TICK_HZ_VAR: &str = "AUTODUEL_TICK_HZ";
pub const TUNING_VAR: &str = "AUTODUEL_TUNING";
pub const DEMO_TICKS_VAR: &str = "AUTODUEL_DEMO_TICKS";

/// Ticks the scripted demo runs for (3 s at 60 Hz).
pub const DEFAULT_DEMO_TICKS: u64 = 180;

/// Seed for cosmetic randomness.
pub fn seed() -> u64 {
    parse_or(env::var(SEED_VAR).ok(), DEFAULT_SEED)
}

/// Game loop rate. Zero falls back to the default.
pub fn tick_hz() -> u32 {
    match parse_or(env::var(TICK_HZ_VAR).ok(), TICK_RATE) {
        0 => TICK_RATE,
        hz => hz,
    }
}

/// Optional JSON tuning override.
pub fn tuning_path() -> Option<PathBuf> {
    env::var_os(TUNING_VAR).map(PathBuf::from)
}

pub fn demo_ticks() -> u64 {
    parse_or(env::var(DEMO_TICKS_VAR).ok(), DEFAULT_DEMO_TICKS)
}

/// Wall time of one tick at `hz`.
pub fn tick_duration(hz: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(hz.max(1)))
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
