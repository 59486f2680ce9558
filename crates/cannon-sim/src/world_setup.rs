//! Entity spawn factories for setting up the level.
//!
//! Creates screen bounds, the cannon on its lift, the basket, and
//! projectiles with appropriate component bundles.

use hecs::World;

use cannon_core::components::*;
use cannon_core::constants::*;
use cannon_core::enums::{Category, Direction, ProjectileState};
use cannon_core::settings::GameSettings;
use cannon_core::types::{Position, Velocity};

/// Set up the level: bounds, cannon and basket.
pub fn setup_level(world: &mut World, settings: &GameSettings) {
    spawn_bounds(world, settings.width, settings.height);
    spawn_cannon(world, settings);
    spawn_basket(world, settings.height);
}

/// Spawn four slabs just outside the visible area.
pub fn spawn_bounds(world: &mut World, width: f64, height: f64) {
    let t = BOUNDS_THICKNESS;
    let slabs = [
        (Position::new(0.0, -t), Hitbox::new(width, t)),
        (Position::new(0.0, height), Hitbox::new(width, t)),
        (Position::new(-t, 0.0), Hitbox::new(t, height)),
        (Position::new(width, 0.0), Hitbox::new(t, height)),
    ];
    for (position, hitbox) in slabs {
        world.spawn((Category::Bounds, position, hitbox));
    }
}

/// Spawn the cannon at the bottom-left, riding an oscillating lift.
pub fn spawn_cannon(world: &mut World, settings: &GameSettings) -> hecs::Entity {
    let oscillator = Oscillator {
        period_secs: settings.lift.period_secs,
        direction: Direction::Up,
        since_flip_secs: 0.0,
        step: settings.lift.step,
    };

    world.spawn((
        Category::Cannon,
        Position::new(CANNON_X, settings.height - CANNON_HEIGHT),
        Hitbox::new(CANNON_WIDTH, CANNON_HEIGHT),
        Launcher {
            muzzle_offset: settings.projectile.spawn_offset,
        },
        oscillator,
    ))
}

/// Spawn the basket: two walls and the collidable scoring line between them.
/// Only the line takes part in collision detection.
pub fn spawn_basket(world: &mut World, height: f64) {
    let wall = Hitbox::new(BASKET_WALL_WIDTH, BASKET_WALL_HEIGHT);
    world.spawn((
        Category::Basket,
        Position::new(BASKET_LEFT_X, height - BASKET_WALL_HEIGHT),
        wall,
    ));
    world.spawn((
        Category::Basket,
        Position::new(BASKET_RIGHT_X, height - BASKET_WALL_HEIGHT),
        wall,
    ));
    world.spawn((
        Category::Basket,
        Position::new(BASKET_LINE_X, height),
        Hitbox::new(BASKET_LINE_WIDTH, BASKET_LINE_HEIGHT),
        Collidable,
    ));
}

/// Spawn a live projectile.
pub fn spawn_projectile(
    world: &mut World,
    position: Position,
    velocity: Velocity,
    size: f64,
    spawn_tick: u64,
    lifetime_ticks: u64,
) -> hecs::Entity {
    world.spawn((
        Category::Bullet,
        position,
        velocity,
        Hitbox::square(size),
        Collidable,
        Projectile {
            spawn_tick,
            lifetime_ticks,
            state: ProjectileState::Spawned,
        },
    ))
}
