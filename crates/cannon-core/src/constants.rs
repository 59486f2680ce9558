//! Game constants and default tuning parameters.
//!
//! The tunable values here are defaults for `GameSettings`; systems read the
//! settings, not these constants.

/// Default tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- World ---

pub const WORLD_WIDTH: f64 = 800.0;
pub const WORLD_HEIGHT: f64 = 600.0;

/// Thickness of the screen edge slabs.
pub const BOUNDS_THICKNESS: f64 = 100.0;

// --- Cannon ---

/// Cannon x position; y is `height - CANNON_HEIGHT`.
pub const CANNON_X: f64 = 50.0;
pub const CANNON_WIDTH: f64 = 70.0;
pub const CANNON_HEIGHT: f64 = 30.0;

// --- Lift ---

/// Seconds between lift direction flips.
pub const LIFT_PERIOD_SECS: f64 = 2.0;

/// Lift travel per tick.
pub const LIFT_STEP: f64 = 2.0;

/// Tolerance absorbing float accumulation in the lift timer.
pub const TIME_EPSILON: f64 = 1e-9;

// --- Projectile ---

/// Projectile speed (units per tick).
pub const PROJECTILE_SPEED: f64 = 10.0;

/// Seconds before an unhit projectile expires.
pub const PROJECTILE_LIFETIME_SECS: f64 = 4.0;

/// Projectile spawn offset from the cannon position.
pub const MUZZLE_OFFSET_X: f64 = 70.0;
pub const MUZZLE_OFFSET_Y: f64 = 0.0;

/// Projectile hitbox side length.
pub const PROJECTILE_SIZE: f64 = 25.0;

// --- Basket ---

pub const BASKET_LEFT_X: f64 = 400.0;
pub const BASKET_RIGHT_X: f64 = 700.0;
pub const BASKET_WALL_WIDTH: f64 = 100.0;
pub const BASKET_WALL_HEIGHT: f64 = 300.0;

/// Scoring line between the basket walls, at the bottom edge of the world.
pub const BASKET_LINE_X: f64 = 500.0;
pub const BASKET_LINE_WIDTH: f64 = 200.0;
pub const BASKET_LINE_HEIGHT: f64 = 5.0;

// --- Scoring ---

pub const POINTS_PER_HIT: u32 = 1000;
