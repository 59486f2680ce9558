//! Collision service: begin-of-contact detection and handler dispatch.
//!
//! Overlaps are computed between axis-aligned hitboxes of entities marked
//! `Collidable`. The service remembers which pairs are touching, so a handler
//! runs once when a contact begins and not again until the pair separates.

use std::collections::{HashMap, HashSet};

use hecs::{Entity, World};

use cannon_core::components::{Collidable, Hitbox};
use cannon_core::enums::Category;
use cannon_core::events::GameEvent;
use cannon_core::settings::GameSettings;
use cannon_core::types::Position;

use crate::session::Session;

/// Mutable state a collision handler may touch.
pub struct CollisionContext<'a> {
    pub world: &'a mut World,
    pub session: &'a mut Session,
    pub settings: &'a GameSettings,
    pub events: &'a mut Vec<GameEvent>,
}

/// Called with the two entities in the order of the registered category pair.
pub type CollisionHandler = fn(&mut CollisionContext<'_>, Entity, Entity);

#[derive(Default)]
pub struct CollisionService {
    handlers: HashMap<(Category, Category), CollisionHandler>,
    /// Currently touching pairs, stored as (lower, higher) entity.
    contacts: HashSet<(Entity, Entity)>,
}

impl CollisionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for contacts between categories `a` and `b`.
    /// The pair also matches `(b, a)`, with the entities swapped.
    pub fn register(&mut self, a: Category, b: Category, handler: CollisionHandler) {
        self.handlers.insert((a, b), handler);
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    pub fn clear_contacts(&mut self) {
        self.contacts.clear();
    }

    /// Detect contacts and dispatch handlers for the ones that just began.
    pub fn run(&mut self, ctx: &mut CollisionContext<'_>) {
        let begun = self.detect(ctx.world);
        self.dispatch(ctx, &begun);
    }

    /// Recompute the touching set. Returns pairs that were not touching
    /// before, in a deterministic order.
    pub fn detect(&mut self, world: &World) -> Vec<(Entity, Entity)> {
        let mut bodies: Vec<(Entity, Position, Hitbox)> = world
            .query::<(&Position, &Hitbox, &Collidable)>()
            .iter()
            .map(|(entity, (pos, hitbox, _))| (entity, *pos, *hitbox))
            .collect();
        bodies.sort_by_key(|(entity, _, _)| *entity);

        let mut touching = HashSet::new();
        for (i, (a, pos_a, box_a)) in bodies.iter().enumerate() {
            for (b, pos_b, box_b) in &bodies[i + 1..] {
                if box_a.overlaps(pos_a, box_b, pos_b) {
                    touching.insert((*a, *b));
                }
            }
        }

        let mut begun: Vec<(Entity, Entity)> =
            touching.difference(&self.contacts).copied().collect();
        begun.sort();

        self.contacts = touching;
        begun
    }

    /// Invoke the registered handler for each pair, if any.
    pub fn dispatch(&self, ctx: &mut CollisionContext<'_>, pairs: &[(Entity, Entity)]) {
        for &(a, b) in pairs {
            let (Some(cat_a), Some(cat_b)) = (category_of(ctx.world, a), category_of(ctx.world, b))
            else {
                continue;
            };

            if let Some(&handler) = self.handlers.get(&(cat_a, cat_b)) {
                handler(ctx, a, b);
            } else if let Some(&handler) = self.handlers.get(&(cat_b, cat_a)) {
                handler(ctx, b, a);
            }
        }
    }

    /// Forget contacts involving entities that no longer exist.
    pub fn prune(&mut self, world: &World) {
        self.contacts
            .retain(|(a, b)| world.contains(*a) && world.contains(*b));
    }
}

fn category_of(world: &World, entity: Entity) -> Option<Category> {
    world.get::<&Category>(entity).ok().map(|c| *c)
}
