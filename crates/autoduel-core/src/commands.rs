//! Commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.
//! Vehicles are addressed by `vehicle_id`, never by ECS handle.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::ProjectileKind;

/// All possible host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Vehicles ---
    /// Add a vehicle with a visible anchor at `position`.
    SpawnVehicle {
        vehicle_id: u32,
        skin_id: String,
        position: Vec3,
    },
    /// Remove a vehicle. Projectiles it fired keep flying.
    DespawnVehicle { vehicle_id: u32 },
    /// Teleport a vehicle's anchor.
    MoveVehicle { vehicle_id: u32, position: Vec3 },

    // --- Weapons ---
    /// Fire a projectile from the vehicle's anchor along `direction`.
    Fire {
        vehicle_id: u32,
        kind: ProjectileKind,
        direction: Vec3,
    },
    /// Pick the vehicle special attacks home on.
    SetHomingTarget { vehicle_id: u32 },
    /// Stop homing; special attacks fly straight.
    ClearHomingTarget,
}
