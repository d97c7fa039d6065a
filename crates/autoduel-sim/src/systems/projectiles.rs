//! Projectile flight system: homing, movement, and end-of-life checks.
//!
//! Dead projectiles are only marked here; `cleanup` removes them.

use hecs::{Entity, World};
use tracing::debug;

use autoduel_core::components::ProjectileId;

use crate::clock::Clock;
use crate::projectile::Projectile;
use crate::world_setup;

/// Advance every live projectile by `delta` seconds.
///
/// `homing_target` is resolved to its anchor once per tick. A target that
/// has despawned or lost its anchor disables homing without error, and a
/// projectile never homes on the vehicle that fired it.
pub fn run(world: &mut World, delta: f32, homing_target: Option<Entity>, clock: &dyn Clock) {
    let target = homing_target.and_then(|entity| {
        world_setup::anchor_of(world, entity).map(|anchor| (entity, anchor))
    });

    for (_entity, (id, projectile)) in world.query_mut::<(&ProjectileId, &mut Projectile)>() {
        if !projectile.is_alive() {
            continue;
        }

        let anchor = target
            .filter(|(entity, _)| projectile.owner() != Some(*entity))
            .map(|(_, anchor)| anchor);

        if !projectile.update(delta, anchor, clock) {
            debug!(
                projectile_id = id.0,
                reason = ?projectile.termination(),
                distance = projectile.distance_traveled(),
                "projectile ended"
            );
        }
    }
}
