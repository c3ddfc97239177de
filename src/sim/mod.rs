//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per frame)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Hitbox, collides, newly_passed, offscreen, out_of_bounds};
pub use spawn::Spawner;
pub use state::{GameEvent, GamePhase, GameState, Obstacle, Player, Snapshot};
pub use tick::{TickInput, tick};
