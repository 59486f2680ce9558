//! Expiry system: live projectiles past their lifetime are marked expired.

use hecs::World;
use tracing::trace;

use cannon_core::components::Projectile;
use cannon_core::enums::ProjectileState;

pub fn run(world: &mut World, current_tick: u64) {
    for (entity, projectile) in world.query_mut::<&mut Projectile>() {
        if projectile.state != ProjectileState::Spawned {
            continue;
        }
        let age = current_tick.saturating_sub(projectile.spawn_tick);
        if age >= projectile.lifetime_ticks {
            projectile.state = ProjectileState::Expired;
            trace!(?entity, age, "projectile expired");
        }
    }
}
