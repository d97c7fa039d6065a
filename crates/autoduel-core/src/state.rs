//! Combat snapshot: the visible projectile state handed to the renderer each tick.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::ProjectileEvent;
use crate::types::SimTime;

/// Complete combat state after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatSnapshot {
    pub time: SimTime,
    pub vehicles: Vec<VehicleView>,
    pub projectiles: Vec<ProjectileView>,
    /// Vehicle special attacks are homing on, if any.
    pub homing_target: Option<u32>,
    pub events: Vec<ProjectileEvent>,
}

/// A vehicle as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleView {
    pub vehicle_id: u32,
    pub skin_id: String,
    /// `None` when the vehicle has no visible anchor.
    pub position: Option<Vec3>,
}

/// A live projectile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub projectile_id: u32,
    pub kind: ProjectileKind,
    /// Firing vehicle, if it still exists.
    pub shooter_id: Option<u32>,
    pub shape: ShapeKey,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
    /// Unit heading.
    pub direction: Vec3,
    pub damage: u32,
    /// Straight-line distance from the spawn point.
    pub distance_traveled: f32,
    /// Wall-clock milliseconds since spawn.
    pub age_ms: u64,
}
