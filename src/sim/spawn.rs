//! Mountain spawn cadence
//!
//! A counter ticks once per running frame; when it reaches the interval it
//! wraps to zero and one mountain is produced with a uniformly random height.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Fixed-cadence spawner
///
/// Only the counter lives here; interval and height range are read from the
/// session's [`Tuning`] on every step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spawner {
    /// Ticks since the last spawn
    pub frame_counter: u32,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.frame_counter = 0;
    }

    /// Advance one tick. Returns the height of a new mountain when one is due.
    pub fn step<R: Rng>(&mut self, tuning: &Tuning, rng: &mut R) -> Option<f32> {
        self.frame_counter += 1;
        if self.frame_counter < tuning.spawn_interval {
            return None;
        }
        self.frame_counter = 0;
        Some(Self::roll_height(tuning, rng))
    }

    /// Uniform integer height in `[obstacle_min_height, obstacle_max_height]`
    ///
    /// The range must be valid (see [`Tuning::validate`]).
    pub fn roll_height<R: Rng>(tuning: &Tuning, rng: &mut R) -> f32 {
        rng.random_range(tuning.obstacle_min_height..=tuning.obstacle_max_height) as f32
    }
}
