//! Entity spawn factories and lookups for the combat world.
//!
//! Vehicles carry `Vehicle` + `Anchor`; projectiles carry
//! `ProjectileId` + `Projectile`.

use glam::Vec3;
use hecs::{Entity, World};

use autoduel_core::components::{Anchor, ProjectileId, Vehicle};

use crate::projectile::Projectile;

/// Spawn a vehicle with a visible anchor.
pub fn spawn_vehicle(world: &mut World, vehicle_id: u32, skin_id: &str, position: Vec3) -> Entity {
    world.spawn((
        Vehicle {
            vehicle_id,
            skin_id: skin_id.to_string(),
        },
        Anchor { position },
    ))
}

/// Spawn a projectile entity.
pub fn spawn_projectile(world: &mut World, projectile_id: u32, projectile: Projectile) -> Entity {
    world.spawn((ProjectileId(projectile_id), projectile))
}

/// Find a vehicle entity by its stable id.
pub fn find_vehicle(world: &World, vehicle_id: u32) -> Option<Entity> {
    world
        .query::<&Vehicle>()
        .iter()
        .find(|(_, vehicle)| vehicle.vehicle_id == vehicle_id)
        .map(|(entity, _)| entity)
}

/// Anchor position of an entity, if it still exists and is visible.
pub fn anchor_of(world: &World, entity: Entity) -> Option<Vec3> {
    world.get::<&Anchor>(entity).ok().map(|anchor| anchor.position)
}
