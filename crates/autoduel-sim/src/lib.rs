//! Projectile simulation for AUTODUEL.
//!
//! Owns the hecs ECS world, steps projectiles once per tick,
//! and produces CombatSnapshots for the renderer.

pub mod clock;
pub mod engine;
pub mod homing;
pub mod projectile;
pub mod systems;
pub mod world_setup;

pub use autoduel_core as core;
pub use autoduel_visuals as visuals;
pub use engine::{CombatEngine, EngineError, SimConfig};

#[cfg(test)]
mod tests;
