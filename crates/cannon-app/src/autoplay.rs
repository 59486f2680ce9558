//! Scripted gunner for headless sessions.
//!
//! Fires on a fixed tick interval at a random point around the basket's
//! bottom line. Seeded, so a given seed always produces the same shots.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cannon_core::commands::{InputEvent, PlayerCommand};
use cannon_core::constants::{BASKET_LINE_HEIGHT, BASKET_LINE_WIDTH, BASKET_LINE_X};
use cannon_core::enums::MouseButton;
use cannon_core::types::Position;

/// Horizontal spread beyond each end of the basket line.
const AIM_JITTER_X: f64 = 40.0;

pub struct AutoGunner {
    rng: ChaCha8Rng,
    interval_ticks: u64,
    world_height: f64,
    last_tick: Option<u64>,
}

impl AutoGunner {
    /// A gunner firing every `interval_ticks` ticks. An interval of zero
    /// never fires.
    pub fn new(seed: u64, interval_ticks: u64, world_height: f64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            interval_ticks,
            world_height,
            last_tick: None,
        }
    }

    /// Commands to queue before the engine runs `tick`. Asking again for
    /// the same tick (the clock is held while paused) yields nothing.
    pub fn commands_for(&mut self, tick: u64) -> Vec<PlayerCommand> {
        if self.interval_ticks == 0 || tick % self.interval_ticks != 0 {
            return Vec::new();
        }
        if self.last_tick == Some(tick) {
            return Vec::new();
        }
        self.last_tick = Some(tick);
        let target = self.pick_target();
        vec![
            PlayerCommand::Input {
                event: InputEvent::PointerMoved {
                    x: target.x,
                    y: target.y,
                },
            },
            PlayerCommand::Input {
                event: InputEvent::ButtonPressed {
                    button: MouseButton::Primary,
                },
            },
            PlayerCommand::Input {
                event: InputEvent::ButtonReleased {
                    button: MouseButton::Primary,
                },
            },
        ]
    }

    fn pick_target(&mut self) -> Position {
        let x = self.rng.gen_range(
            BASKET_LINE_X - AIM_JITTER_X..BASKET_LINE_X + BASKET_LINE_WIDTH + AIM_JITTER_X,
        );
        let y = self
            .rng
            .gen_range(self.world_height..self.world_height + BASKET_LINE_HEIGHT);
        Position::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer_targets(gunner: &mut AutoGunner, ticks: u64) -> Vec<(u64, f64, f64)> {
        let mut targets = Vec::new();
        for tick in 0..ticks {
            for cmd in gunner.commands_for(tick) {
                if let PlayerCommand::Input {
                    event: InputEvent::PointerMoved { x, y },
                } = cmd
                {
                    targets.push((tick, x, y));
                }
            }
        }
        targets
    }

    #[test]
    fn test_fires_on_interval() {
        let mut gunner = AutoGunner::new(42, 45, 600.0);
        let targets = pointer_targets(&mut gunner, 200);
        let ticks: Vec<u64> = targets.iter().map(|(t, _, _)| *t).collect();
        assert_eq!(ticks, vec![0, 45, 90, 135, 180]);
    }

    #[test]
    fn test_each_shot_is_move_press_release() {
        let mut gunner = AutoGunner::new(1, 10, 600.0);
        let cmds = gunner.commands_for(0);
        assert_eq!(cmds.len(), 3);
        assert!(matches!(
            cmds[1],
            PlayerCommand::Input {
                event: InputEvent::ButtonPressed {
                    button: MouseButton::Primary
                }
            }
        ));
        assert!(matches!(
            cmds[2],
            PlayerCommand::Input {
                event: InputEvent::ButtonReleased {
                    button: MouseButton::Primary
                }
            }
        ));
        assert!(gunner.commands_for(5).is_empty());
    }

    #[test]
    fn test_repeated_tick_fires_once() {
        let mut gunner = AutoGunner::new(3, 10, 600.0);
        assert_eq!(gunner.commands_for(10).len(), 3);
        assert!(gunner.commands_for(10).is_empty());
        assert_eq!(gunner.commands_for(20).len(), 3);
    }

    #[test]
    fn test_targets_stay_near_basket_line() {
        let mut gunner = AutoGunner::new(9, 1, 600.0);
        for (_, x, y) in pointer_targets(&mut gunner, 500) {
            assert!((460.0..740.0).contains(&x), "x out of range: {x}");
            assert!((600.0..605.0).contains(&y), "y out of range: {y}");
        }
    }

    #[test]
    fn test_same_seed_same_targets() {
        let a = pointer_targets(&mut AutoGunner::new(7, 30, 600.0), 600);
        let b = pointer_targets(&mut AutoGunner::new(7, 30, 600.0), 600);
        let c = pointer_targets(&mut AutoGunner::new(8, 30, 600.0), 600);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_zero_interval_never_fires() {
        let mut gunner = AutoGunner::new(42, 0, 600.0);
        assert!(pointer_targets(&mut gunner, 100).is_empty());
    }
}
