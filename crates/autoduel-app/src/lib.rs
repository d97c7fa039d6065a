//! AUTODUEL headless host.
//!
//! This crate wires the combat engine to a fixed-rate game loop thread
//! and exposes it to the host through shared state and a command channel.

pub mod config;
pub mod game_loop;
pub mod state;

pub use autoduel_core as core;
