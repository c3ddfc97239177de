//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Defaults mirror [`crate::consts`];
//! hosts can override any subset from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors produced while loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub scroll_speed: f32,
    pub jump_impulse: f32,
    pub player_x: f32,
    pub player_start_y: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub obstacle_width: f32,
    pub spawn_interval: u32,
    pub obstacle_min_height: u32,
    pub obstacle_max_height: u32,
    pub hitbox_padding: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            scroll_speed: SCROLL_SPEED,
            jump_impulse: JUMP_IMPULSE,
            player_x: PLAYER_X,
            player_start_y: PLAYER_START_Y,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            spawn_interval: SPAWN_INTERVAL,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_max_height: OBSTACLE_MAX_HEIGHT,
            hitbox_padding: HITBOX_PADDING,
        }
    }
}

impl Tuning {
    /// Parse and validate a tuning document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if !(self.gravity > 0.0) {
            return invalid("gravity", "must be positive");
        }
        if !(self.scroll_speed > 0.0) {
            return invalid("scroll_speed", "must be positive");
        }
        if !(self.jump_impulse < 0.0) {
            return invalid("jump_impulse", "must be negative (upward)");
        }
        if !(self.player_width > 0.0) || !(self.player_height > 0.0) {
            return invalid("player_width/player_height", "must be positive");
        }
        if !(self.obstacle_width > 0.0) {
            return invalid("obstacle_width", "must be positive");
        }
        if self.spawn_interval == 0 {
            return invalid("spawn_interval", "must be at least 1 tick");
        }
        if self.obstacle_min_height > self.obstacle_max_height {
            return invalid("obstacle_min_height", "must not exceed obstacle_max_height");
        }
        if !(self.hitbox_padding >= 0.0) {
            return invalid("hitbox_padding", "must not be negative");
        }
        Ok(())
    }
}
