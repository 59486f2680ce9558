//! Lift system: vertical oscillation with a periodic direction flip.

use hecs::World;
use tracing::debug;

use cannon_core::components::Oscillator;
use cannon_core::constants::TIME_EPSILON;
use cannon_core::events::GameEvent;
use cannon_core::types::Position;

/// Advance one oscillator by `dt` seconds.
///
/// Flips the direction once `period_secs` has accumulated since the last flip,
/// resetting the accumulator to zero (any overshoot is dropped). Returns the
/// y translation for this tick and whether a flip happened.
pub fn step(osc: &mut Oscillator, dt: f64) -> (f64, bool) {
    osc.since_flip_secs += dt;

    let flipped = osc.since_flip_secs + TIME_EPSILON >= osc.period_secs;
    if flipped {
        osc.direction = osc.direction.flipped();
        osc.since_flip_secs = 0.0;
    }

    (osc.direction.sign() * osc.step, flipped)
}

/// Move every lifted entity by its oscillator's step.
pub fn run(world: &mut World, dt: f64, events: &mut Vec<GameEvent>) {
    for (_entity, (pos, osc)) in world.query_mut::<(&mut Position, &mut Oscillator)>() {
        let (dy, flipped) = step(osc, dt);
        if flipped {
            debug!(direction = ?osc.direction, y = pos.y, "lift reversed");
            events.push(GameEvent::LiftReversed {
                direction: osc.direction,
            });
        }
        pos.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cannon_core::enums::Direction;

    fn oscillator() -> Oscillator {
        Oscillator {
            period_secs: 2.0,
            direction: Direction::Up,
            since_flip_secs: 0.0,
            step: 2.0,
        }
    }

    #[test]
    fn test_flip_at_period_boundary() {
        // Elapsed 0s, 1.9s, 2.1s.
        let mut osc = oscillator();
        assert_eq!(step(&mut osc, 0.0), (-2.0, false));
        assert_eq!(osc.direction, Direction::Up);
        assert_eq!(step(&mut osc, 1.9), (-2.0, false));
        assert_eq!(osc.direction, Direction::Up);
        assert_eq!(step(&mut osc, 0.2), (2.0, true));
        assert_eq!(osc.direction, Direction::Down);
    }

    #[test]
    fn test_overshoot_is_discarded() {
        let mut osc = oscillator();
        step(&mut osc, 3.5);
        assert_eq!(osc.direction, Direction::Down);
        assert_eq!(osc.since_flip_secs, 0.0);
        // A carried-over remainder would flip again here.
        step(&mut osc, 1.0);
        assert_eq!(osc.direction, Direction::Down);
        step(&mut osc, 1.0);
        assert_eq!(osc.direction, Direction::Up);
    }

    #[test]
    fn test_fixed_rate_flips_after_period() {
        let mut osc = oscillator();
        let dt = 1.0 / 60.0;
        for _ in 0..119 {
            let (_, flipped) = step(&mut osc, dt);
            assert!(!flipped);
        }
        let (dy, flipped) = step(&mut osc, dt);
        assert!(flipped);
        assert_eq!(dy, 2.0);
    }
}
