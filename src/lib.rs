//! Tiny Flight - A one-button side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `renderer`: Draw-command generation and the Canvas 2D backend
//! - `platform`: Browser/native input abstraction
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
///
/// Units are pixels and ticks. One tick is one rendered frame.
pub mod consts {
    /// Default play-field size (used by the native demo and tests)
    pub const DEFAULT_FIELD_WIDTH: f32 = 400.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 600.0;

    /// Downward acceleration added to the bird's velocity every tick
    pub const GRAVITY: f32 = 0.25;
    /// Leftward scroll per tick for every mountain
    pub const SCROLL_SPEED: f32 = 2.0;

    /// Bird defaults - x never changes during a run
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = 150.0;
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 90.0;
    /// Velocity written on every flap (negative = up)
    pub const JUMP_IMPULSE: f32 = -6.0;

    /// Mountain defaults
    pub const OBSTACLE_WIDTH: f32 = 300.0;
    /// Ticks between spawns
    pub const SPAWN_INTERVAL: u32 = 150;
    /// Inclusive spawn height range
    pub const OBSTACLE_MIN_HEIGHT: u32 = 100;
    pub const OBSTACLE_MAX_HEIGHT: u32 = 300;

    /// Inward shrink applied to both hitboxes before overlap tests
    pub const HITBOX_PADDING: f32 = 40.0;
}
