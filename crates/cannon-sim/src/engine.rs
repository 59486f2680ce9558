//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::{HashMap, VecDeque};

use hecs::World;
use tracing::{debug, info};

use cannon_core::commands::PlayerCommand;
use cannon_core::enums::{Action, Category, GamePhase, MouseButton};
use cannon_core::events::GameEvent;
use cannon_core::settings::{GameSettings, SettingsError};
use cannon_core::state::GameStateSnapshot;
use cannon_core::types::SimTime;

use crate::input::InputService;
use crate::session::Session;
use crate::systems;
use crate::systems::collision::{CollisionContext, CollisionService};
use crate::systems::fire::{ActionContext, ActionHandler};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub settings: GameSettings,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            settings: GameSettings::default(),
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    settings: GameSettings,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,

    input: InputService,
    actions: HashMap<Action, ActionHandler>,
    collisions: CollisionService,
    session: Session,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    ///
    /// Fails if the settings do not validate. With the menu disabled the
    /// first session starts immediately; otherwise the engine waits in
    /// `MainMenu` for `StartGame`.
    pub fn new(config: SimConfig) -> Result<Self, SettingsError> {
        config.settings.validate()?;

        let mut input = InputService::new();
        input.bind(MouseButton::Primary, Action::Shoot);

        let mut actions: HashMap<Action, ActionHandler> = HashMap::new();
        actions.insert(Action::Shoot, systems::fire::shoot);

        let mut collisions = CollisionService::new();
        collisions.register(
            Category::Bullet,
            Category::Basket,
            systems::scoring::on_bullet_hits_basket,
        );

        let mut engine = Self {
            world: World::new(),
            settings: config.settings,
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: clamp_time_scale(config.time_scale),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            input,
            actions,
            collisions,
            session: Session::default(),
        };

        if !engine.settings.menu_enabled {
            engine.start_session();
        }
        Ok(engine)
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Commands are always processed. The world and clock only advance while
    /// `Active` with a non-zero time scale.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active && self.time_scale > 0.0 {
            self.run_systems();
            self.time.advance(self.settings.dt());
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.session,
            self.settings.dt(),
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Current score. Reflects collisions handled in the last tick.
    pub fn score(&self) -> u64 {
        self.session.score.value()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Number of collidable pairs currently touching.
    pub fn contact_count(&self) -> usize {
        self.collisions.contact_count()
    }

    /// Spawn a live projectile directly (for tests needing exact placement).
    #[cfg(test)]
    pub fn spawn_test_projectile(
        &mut self,
        position: cannon_core::types::Position,
        velocity: cannon_core::types::Velocity,
    ) -> hecs::Entity {
        let tuning = &self.settings.projectile;
        world_setup::spawn_projectile(
            &mut self.world,
            position,
            velocity,
            tuning.size,
            self.time.tick,
            self.settings.secs_to_ticks(tuning.lifetime_secs),
        )
    }

    /// Clear the world and begin a fresh session with a zero score.
    fn start_session(&mut self) {
        self.world.clear();
        self.collisions.clear_contacts();
        self.session.reset();
        self.events.clear();
        self.time = SimTime::default();

        world_setup::setup_level(&mut self.world, &self.settings);
        self.phase = GamePhase::Active;
        self.events.push(GameEvent::SessionStarted);
        info!(title = %self.settings.title, version = %self.settings.version, "session started");
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::MainMenu {
                    self.start_session();
                }
            }
            PlayerCommand::ResetSession => {
                self.start_session();
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = clamp_time_scale(scale);
            }
            PlayerCommand::Input { event } => {
                // Pointer and button state are tracked in every phase;
                // actions only fire while the session is running.
                let Some(action) = self.input.handle(event) else {
                    return;
                };
                if self.phase == GamePhase::Active {
                    self.dispatch_action(action);
                } else {
                    debug!(?action, phase = ?self.phase, "action ignored outside active session");
                }
            }
        }
    }

    fn dispatch_action(&mut self, action: Action) {
        let Some(&handler) = self.actions.get(&action) else {
            return;
        };
        let mut ctx = ActionContext {
            world: &mut self.world,
            session: &mut self.session,
            settings: &self.settings,
            events: &mut self.events,
            pointer: self.input.pointer(),
            tick: self.time.tick,
        };
        handler(&mut ctx);
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let dt = self.settings.dt();
        // 1. Lift oscillation
        systems::lift::run(&mut self.world, dt, &mut self.events);
        // 2. Movement integration
        systems::movement::run(&mut self.world);
        // 3. Collision detection + handlers (scoring)
        let mut ctx = CollisionContext {
            world: &mut self.world,
            session: &mut self.session,
            settings: &self.settings,
            events: &mut self.events,
        };
        self.collisions.run(&mut ctx);
        // 4. Projectile expiry
        systems::expiry::run(&mut self.world, self.time.tick);
        // 5. Cleanup (collided, expired)
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.session,
            &mut self.events,
        );
        self.collisions.prune(&self.world);
    }
}

/// Scales below this stall the simulation.
const MIN_TIME_SCALE: f64 = 0.001;

/// Time scale limits: 0.0 stalls, 4.0 is the fastest.
fn clamp_time_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return 1.0;
    }
    if scale < MIN_TIME_SCALE {
        return 0.0;
    }
    scale.min(4.0)
}
