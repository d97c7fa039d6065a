//! Simulation constants and tuning parameters.

/// Update rate the weapon speeds were tuned against (Hz).
///
/// Per-tick displacement is `speed * delta * TICK_BASIS_HZ`, so `speed` is
/// in units per nominal 60 Hz frame regardless of the real tick rate.
pub const TICK_BASIS_HZ: f32 = 60.0;

/// Default host loop rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the default host loop rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Machine gun ---

/// Units per tick-basis frame.
pub const BASIC_SPEED: f32 = 2.0;

pub const BASIC_DAMAGE: u32 = 5;

/// Wall-clock lifetime in milliseconds.
pub const BASIC_LIFETIME_MS: u64 = 3000;

/// Maximum straight-line distance from the spawn point.
pub const BASIC_MAX_DISTANCE: f32 = 50.0;

// --- Special attack ---

pub const SPECIAL_SPEED: f32 = 1.0;

pub const SPECIAL_DAMAGE: u32 = 50;

/// 50% longer than the machine gun.
pub const SPECIAL_LIFETIME_MS: u64 = 4500;

/// 50% farther than the machine gun.
pub const SPECIAL_MAX_DISTANCE: f32 = 75.0;

// --- Flight ---

/// Fraction of the way the heading turns toward the target each tick.
pub const HOMING_BLEND: f32 = 0.1;

/// Squared per-tick displacement below which a projectile counts as stalled.
pub const MIN_MOVEMENT_SQ: f32 = 1e-4;

/// Uniform scale applied to every projectile visual.
pub const SHAPE_SCALE: f32 = 2.0;

// --- Engine ---

/// Default RNG seed for cosmetic randomness.
pub const DEFAULT_SEED: u64 = 42;
