//! Cleanup system: removes projectiles that collided or expired.

use hecs::{Entity, World};

use cannon_core::components::Projectile;
use cannon_core::enums::{ProjectileState, RemovalReason};
use cannon_core::events::GameEvent;

use crate::session::Session;

/// Despawn every projectile that left the `Spawned` state this tick.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    session: &mut Session,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        let reason = match projectile.state {
            ProjectileState::Spawned => continue,
            ProjectileState::Collided => RemovalReason::Collided,
            ProjectileState::Expired => {
                session.stats.expired += 1;
                RemovalReason::Expired
            }
        };
        despawn_buffer.push(entity);
        events.push(GameEvent::ProjectileRemoved { reason });
    }

    // Every buffered entity came from the query above, so despawn cannot miss.
    for entity in despawn_buffer.drain(..) {
        let despawned = world.despawn(entity);
        debug_assert!(despawned.is_ok(), "cleanup buffered a dead entity");
    }
}
