//! Game settings, loadable from TOML.
//!
//! Every field has a default, so a settings file only needs the keys it
//! overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Position;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings")]
    Parse(#[from] toml::de::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Top-level game settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub title: String,
    pub version: String,
    pub width: f64,
    pub height: f64,
    /// Kept for settings-file compatibility; no intro exists.
    pub intro_enabled: bool,
    /// Start in the main menu and wait for `StartGame`.
    pub menu_enabled: bool,
    /// Periodically log the achieved tick rate.
    pub show_fps: bool,
    /// Simulation tick rate (Hz).
    pub tick_rate: u32,
    pub lift: LiftTuning,
    pub projectile: ProjectileTuning,
    pub scoring: ScoringTuning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiftTuning {
    pub period_secs: f64,
    pub step: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    /// Units per tick.
    pub speed: f64,
    pub lifetime_secs: f64,
    /// Side length of the square hitbox.
    pub size: f64,
    /// Spawn offset from the launcher position.
    pub spawn_offset: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTuning {
    pub points_per_hit: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            title: String::from("Cannon"),
            version: String::from("0.1dev"),
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            intro_enabled: false,
            menu_enabled: true,
            show_fps: false,
            tick_rate: TICK_RATE,
            lift: LiftTuning::default(),
            projectile: ProjectileTuning::default(),
            scoring: ScoringTuning::default(),
        }
    }
}

impl Default for LiftTuning {
    fn default() -> Self {
        Self {
            period_secs: LIFT_PERIOD_SECS,
            step: LIFT_STEP,
        }
    }
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: PROJECTILE_SPEED,
            lifetime_secs: PROJECTILE_LIFETIME_SECS,
            size: PROJECTILE_SIZE,
            spawn_offset: Position::new(MUZZLE_OFFSET_X, MUZZLE_OFFSET_Y),
        }
    }
}

impl Default for ScoringTuning {
    fn default() -> Self {
        Self {
            points_per_hit: POINTS_PER_HIT,
        }
    }
}

impl GameSettings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a TOML settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / self.tick_rate as f64
    }

    /// Convert a duration in seconds to a whole number of ticks (rounded).
    pub fn secs_to_ticks(&self, secs: f64) -> u64 {
        (secs * self.tick_rate as f64).round() as u64
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: &str| Err(SettingsError::Invalid(msg.to_string()));

        if self.tick_rate == 0 {
            return invalid("tick_rate must be positive");
        }
        if !(self.width > 0.0 && self.height > 0.0) {
            return invalid("world width and height must be positive");
        }
        if !(self.lift.period_secs > 0.0) {
            return invalid("lift.period_secs must be positive");
        }
        if !(self.lift.step >= 0.0) {
            return invalid("lift.step must not be negative");
        }
        if !(self.projectile.speed >= 0.0) {
            return invalid("projectile.speed must not be negative");
        }
        if !(self.projectile.lifetime_secs > 0.0) {
            return invalid("projectile.lifetime_secs must be positive");
        }
        if !(self.projectile.size > 0.0) {
            return invalid("projectile.size must be positive");
        }
        Ok(())
    }
}
