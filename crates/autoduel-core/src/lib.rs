//! Core types and definitions for the AUTODUEL projectile simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! projectile kinds, vehicle skins, tuning, components, commands,
//! snapshots, events, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod tuning;
pub mod types;
