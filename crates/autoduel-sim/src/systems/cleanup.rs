//! Cleanup system: removes projectiles whose flight has ended.

use hecs::{Entity, World};

use autoduel_core::components::ProjectileId;
use autoduel_core::events::ProjectileEvent;

use crate::projectile::Projectile;

/// Despawn ended projectiles and report why each one ended.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<ProjectileEvent>) {
    despawn_buffer.clear();

    let start = events.len();
    for (entity, (id, projectile)) in world.query_mut::<(&ProjectileId, &Projectile)>() {
        if let Some(reason) = projectile.termination() {
            events.push(ProjectileEvent::Expired {
                projectile_id: id.0,
                reason,
                distance: projectile.distance_traveled(),
            });
            despawn_buffer.push(entity);
        }
    }
    events[start..].sort_by_key(|event| match event {
        ProjectileEvent::Expired { projectile_id, .. } => *projectile_id,
        ProjectileEvent::Fired { projectile_id, .. } => *projectile_id,
    });

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
