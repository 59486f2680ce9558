//! Scoring rule: a bullet landing in the basket is removed and scores.

use hecs::Entity;
use tracing::info;

use cannon_core::components::Projectile;
use cannon_core::enums::ProjectileState;
use cannon_core::events::GameEvent;

use crate::systems::collision::CollisionContext;

/// Collision handler for `(Bullet, Basket)` contacts.
///
/// A projectile that is no longer `Spawned` was already handled (for example
/// it touched two basket pieces in the same tick) and is skipped. Removal
/// itself happens in the cleanup system.
pub fn on_bullet_hits_basket(ctx: &mut CollisionContext<'_>, bullet: Entity, _basket: Entity) {
    {
        let Ok(mut projectile) = ctx.world.get::<&mut Projectile>(bullet) else {
            return;
        };
        if projectile.state != ProjectileState::Spawned {
            return;
        }
        projectile.state = ProjectileState::Collided;
    }

    let value = ctx.session.score.add(ctx.settings.scoring.points_per_hit);
    ctx.session.stats.hits += 1;
    ctx.events.push(GameEvent::ScoreChanged { value });
    info!(score = value, "projectile landed in basket");
}
