//! Tunable simulation parameters.
//!
//! Values start from [`SimConfig::default`] and can be overridden through
//! `PACBOX_*` environment variables, e.g. `PACBOX_GHOST_COUNT=2`.

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{score, speed, FIXED_STEP, FRIGHTENED_DURATION, MAX_GHOSTS};
use crate::error::ConfigError;

/// Largest distance, in cells, any agent may cover in a single step.
///
/// Keeps a ghost and the player from passing through each other between two
/// collision checks.
pub const MAX_CELLS_PER_STEP: f32 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Player speed, in cells per second
    pub player_speed: f32,
    /// Hunting ghost speed on the first level, in cells per second
    pub ghost_speed: f32,
    /// Frightened ghost speed, in cells per second
    pub ghost_frightened_speed: f32,
    /// Hunting speed gained per level above the first
    pub ghost_speed_per_level: f32,
    /// Ceiling for the hunting speed, must stay below the player speed
    pub max_ghost_speed: f32,
    /// Seconds a power pellet keeps ghosts frightened
    pub frightened_duration: f32,
    /// Points awarded for clearing a level
    pub level_clear_bonus: u32,
    /// Number of ghosts to run
    pub ghost_count: usize,
    /// Fill missing ghost spawns from the neighbours of the first one
    pub synthesize_ghosts: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            player_speed: speed::PLAYER,
            ghost_speed: speed::GHOST,
            ghost_frightened_speed: speed::GHOST_FRIGHTENED,
            ghost_speed_per_level: speed::GHOST_PER_LEVEL,
            max_ghost_speed: speed::GHOST_MAX,
            frightened_duration: FRIGHTENED_DURATION,
            level_clear_bonus: score::LEVEL_CLEAR,
            ghost_count: MAX_GHOSTS,
            synthesize_ghosts: true,
        }
    }
}

impl SimConfig {
    /// Prefix of the environment variables read by [`SimConfig::load`].
    pub const ENV_PREFIX: &'static str = "PACBOX_";

    /// The layered configuration sources: defaults, then the environment.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(SimConfig::default())).merge(Env::prefixed(Self::ENV_PREFIX))
    }

    /// Extracts and validates the configuration from [`SimConfig::figment`].
    pub fn load() -> Result<Self, ConfigError> {
        let config: SimConfig = Self::figment().extract()?;
        config.validate()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Hunting ghost speed for the given level, ramped and capped.
    pub fn ghost_speed_for_level(&self, level: u32) -> f32 {
        let ramp = self.ghost_speed_per_level * level.saturating_sub(1) as f32;
        (self.ghost_speed + ramp).min(self.max_ghost_speed)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let step = FIXED_STEP.as_secs_f32();
        for (field, value) in [
            ("player_speed", self.player_speed),
            ("ghost_speed", self.ghost_speed),
            ("ghost_frightened_speed", self.ghost_frightened_speed),
            ("max_ghost_speed", self.max_ghost_speed),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, format!("must be a positive number, got {value}")));
            }
            if value * step > MAX_CELLS_PER_STEP {
                return Err(invalid(
                    field,
                    format!("{value} cells/s covers more than {MAX_CELLS_PER_STEP} cells per step"),
                ));
            }
        }

        if self.ghost_frightened_speed > self.ghost_speed {
            return Err(invalid(
                "ghost_frightened_speed",
                format!("{} exceeds the hunting speed {}", self.ghost_frightened_speed, self.ghost_speed),
            ));
        }
        if self.ghost_speed >= self.player_speed {
            return Err(invalid(
                "ghost_speed",
                format!("{} must be below the player speed {}", self.ghost_speed, self.player_speed),
            ));
        }
        if self.max_ghost_speed < self.ghost_speed || self.max_ghost_speed >= self.player_speed {
            return Err(invalid(
                "max_ghost_speed",
                format!(
                    "{} must lie between the ghost speed {} and the player speed {}",
                    self.max_ghost_speed, self.ghost_speed, self.player_speed
                ),
            ));
        }
        if !self.ghost_speed_per_level.is_finite() || self.ghost_speed_per_level < 0.0 {
            return Err(invalid("ghost_speed_per_level", "must be zero or positive".to_string()));
        }
        if !self.frightened_duration.is_finite() || self.frightened_duration < 0.0 {
            return Err(invalid("frightened_duration", "must be zero or positive".to_string()));
        }
        if !(1..=MAX_GHOSTS).contains(&self.ghost_count) {
            return Err(invalid(
                "ghost_count",
                format!("{} is outside 1..={MAX_GHOSTS}", self.ghost_count),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
