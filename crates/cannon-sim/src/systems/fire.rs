//! Fire action: spawn a projectile from the launcher, aimed at the pointer.

use hecs::World;
use tracing::{debug, warn};

use cannon_core::components::Launcher;
use cannon_core::events::GameEvent;
use cannon_core::settings::GameSettings;
use cannon_core::types::{Position, Velocity};

use crate::session::Session;
use crate::world_setup;

/// Mutable state an action handler may touch.
pub struct ActionContext<'a> {
    pub world: &'a mut World,
    pub session: &'a mut Session,
    pub settings: &'a GameSettings,
    pub events: &'a mut Vec<GameEvent>,
    /// Pointer position at the time the action began.
    pub pointer: Position,
    pub tick: u64,
}

pub type ActionHandler = fn(&mut ActionContext<'_>);

/// Velocity of `speed` from `from` toward `to`.
/// Zero when the two points coincide.
pub fn aim(from: Position, to: Position, speed: f64) -> Velocity {
    let direction = (to.as_dvec2() - from.as_dvec2()).normalize_or_zero();
    Velocity::from_dvec2(direction * speed)
}

/// Handler for `Action::Shoot`.
pub fn shoot(ctx: &mut ActionContext<'_>) {
    let muzzle = ctx
        .world
        .query::<(&Launcher, &Position)>()
        .iter()
        .next()
        .map(|(_, (launcher, pos))| pos.offset(launcher.muzzle_offset.x, launcher.muzzle_offset.y));

    let Some(spawn) = muzzle else {
        debug!("no launcher in world, shot ignored");
        return;
    };

    let tuning = &ctx.settings.projectile;
    let velocity = aim(spawn, ctx.pointer, tuning.speed);
    if velocity.is_zero() && tuning.speed > 0.0 {
        warn!(x = spawn.x, y = spawn.y, "pointer at spawn point, projectile has no velocity");
    }

    let lifetime_ticks = ctx.settings.secs_to_ticks(tuning.lifetime_secs);
    let entity = world_setup::spawn_projectile(
        ctx.world,
        spawn,
        velocity,
        tuning.size,
        ctx.tick,
        lifetime_ticks,
    );

    ctx.session.stats.shots_fired += 1;
    ctx.events.push(GameEvent::ProjectileFired {
        position: spawn,
        velocity,
    });
    debug!(?entity, vx = velocity.x, vy = velocity.y, "projectile fired");
}
