//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Projectile lifecycle events, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProjectileEvent {
    /// A projectile was spawned.
    Fired {
        projectile_id: u32,
        kind: ProjectileKind,
        shooter_id: u32,
        shape: ShapeKey,
    },
    /// A projectile ended and was removed.
    Expired {
        projectile_id: u32,
        reason: Termination,
        /// Distance from the spawn point when it ended.
        distance: f32,
    },
}
