//! Snapshot system: queries the ECS world and builds a GameStateSnapshot.
//!
//! Read-only: it never modifies the world.

use hecs::World;

use cannon_core::components::*;
use cannon_core::enums::{Category, GamePhase};
use cannon_core::events::GameEvent;
use cannon_core::state::*;
use cannon_core::types::{Position, SimTime, Velocity};

use crate::session::Session;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    session: &Session,
    dt: f64,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        score: ScoreView::new(session.score.value()),
        stats: StatsView {
            shots_fired: session.stats.shots_fired,
            hits: session.stats.hits,
            expired: session.stats.expired,
        },
        lift: build_lift(world),
        projectiles: build_projectiles(world, time.tick, dt),
        bodies: build_bodies(world),
        events,
    }
}

fn build_lift(world: &World) -> Option<LiftView> {
    world
        .query::<(&Oscillator, &Position)>()
        .iter()
        .next()
        .map(|(_, (osc, pos))| LiftView {
            position: *pos,
            direction: osc.direction,
        })
}

/// Live projectiles, ordered by entity id.
fn build_projectiles(world: &World, current_tick: u64, dt: f64) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(entity, (projectile, pos, vel))| ProjectileView {
            id: entity.to_bits().get(),
            position: *pos,
            velocity: *vel,
            age_secs: SimTime::ticks_to_secs(
                current_tick.saturating_sub(projectile.spawn_tick),
                dt,
            ),
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}

/// Static scenery (everything except the cannon and projectiles).
fn build_bodies(world: &World) -> Vec<BodyView> {
    let mut bodies: Vec<(hecs::Entity, BodyView)> = world
        .query::<(&Category, &Position, &Hitbox, Option<&Collidable>)>()
        .iter()
        .filter(|(_, (category, _, _, _))| matches!(**category, Category::Basket | Category::Bounds))
        .map(|(entity, (category, pos, size, collidable))| {
            (
                entity,
                BodyView {
                    category: *category,
                    position: *pos,
                    size: *size,
                    collidable: collidable.is_some(),
                },
            )
        })
        .collect();
    bodies.sort_by_key(|(entity, _)| *entity);
    bodies.into_iter().map(|(_, body)| body).collect()
}
