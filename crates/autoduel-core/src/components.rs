//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A combat vehicle that can fire and be targeted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Stable id used by commands and snapshots.
    pub vehicle_id: u32,
    /// Catalog skin id (see `Skin::as_str`). Unknown ids are allowed.
    pub skin_id: String,
}

/// Reference position of an entity with a live visual.
///
/// Entities without an anchor (wrecked, hidden) cannot be homed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub position: Vec3,
}

/// Stable id of a projectile entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectileId(pub u32);
