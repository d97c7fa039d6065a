//! Snapshot system: queries the ECS world and builds a complete CombatSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::{Entity, World};

use autoduel_core::components::{Anchor, ProjectileId, Vehicle};
use autoduel_core::events::ProjectileEvent;
use autoduel_core::state::*;
use autoduel_core::types::SimTime;

use crate::clock::Clock;
use crate::projectile::Projectile;

/// Build a complete CombatSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    homing_target: Option<Entity>,
    clock: &dyn Clock,
    events: Vec<ProjectileEvent>,
) -> CombatSnapshot {
    CombatSnapshot {
        time: *time,
        vehicles: build_vehicles(world),
        projectiles: build_projectiles(world, clock),
        homing_target: homing_target.and_then(|entity| vehicle_id_of(world, entity)),
        events,
    }
}

/// Stable id of a vehicle entity, if it still exists.
fn vehicle_id_of(world: &World, entity: Entity) -> Option<u32> {
    world
        .get::<&Vehicle>(entity)
        .ok()
        .map(|vehicle| vehicle.vehicle_id)
}

fn build_vehicles(world: &World) -> Vec<VehicleView> {
    let mut vehicles: Vec<VehicleView> = world
        .query::<(&Vehicle, Option<&Anchor>)>()
        .iter()
        .map(|(_, (vehicle, anchor))| VehicleView {
            vehicle_id: vehicle.vehicle_id,
            skin_id: vehicle.skin_id.clone(),
            position: anchor.map(|a| a.position),
        })
        .collect();

    vehicles.sort_by_key(|v| v.vehicle_id);
    vehicles
}

/// Live projectiles only; ended ones are gone after cleanup.
fn build_projectiles(world: &World, clock: &dyn Clock) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&ProjectileId, &Projectile)>()
        .iter()
        .filter(|(_, (_, projectile))| projectile.is_alive())
        .map(|(_, (id, projectile))| {
            let instance = projectile.shape();
            ProjectileView {
                projectile_id: id.0,
                kind: projectile.kind(),
                shooter_id: projectile
                    .owner()
                    .and_then(|owner| vehicle_id_of(world, owner)),
                shape: instance.shape.key,
                position: instance.transform.position,
                rotation: instance.transform.rotation,
                scale: instance.transform.scale,
                direction: projectile.direction(),
                damage: projectile.damage(),
                distance_traveled: projectile.distance_traveled(),
                age_ms: projectile.age_ms(clock),
            }
        })
        .collect();

    projectiles.sort_by_key(|p| p.projectile_id);
    projectiles
}
