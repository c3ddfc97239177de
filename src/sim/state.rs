//! Game state and core simulation types
//!
//! One `GameState` owns everything a session needs: the bird, the mountains,
//! the score, the phase and the seeded RNG. Hosts keep it and pass it into
//! `tick` and the input entry points; there is no global state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::Spawner;
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first activation (start screen)
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended; only an explicit restart leaves this phase
    Ended,
}

/// Notifications for the host UI, drained with [`GameState::drain_events`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    ScoreChanged(u32),
    ObstacleSpawned { height: f32 },
    ObstacleRetired,
}

/// The bird. Only `pos.y` and `velocity` change during a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in field coordinates (y grows downward)
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity in pixels/tick (positive = falling)
    pub velocity: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, tuning.player_start_y),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            velocity: 0.0,
        }
    }

    /// Back to the start height, at rest
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    /// Overwrite velocity with the jump impulse (not additive)
    #[inline]
    pub fn flap(&mut self, impulse: f32) {
        self.velocity = impulse;
    }

    /// One fixed step: gravity first, then position
    #[inline]
    pub fn integrate(&mut self, gravity: f32) {
        self.velocity += gravity;
        self.pos.y += self.velocity;
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// A mountain rising from the bottom of the field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Extent above the field's bottom edge
    pub height: f32,
    /// Set once the bird has fully cleared it
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, height: f32) -> Self {
        Self {
            x,
            height,
            passed: false,
        }
    }

    /// Right edge (width is shared by all mountains)
    #[inline]
    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }

    /// Top edge given the field height
    #[inline]
    pub fn top(&self, field_height: f32) -> f32 {
        field_height - self.height
    }
}

/// Read-only copy of everything a renderer or HUD needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub field: Vec2,
    pub player_pos: Vec2,
    pub player_size: Vec2,
    pub obstacle_width: f32,
    /// Active mountains in spawn order
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub phase: GamePhase,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Play-field size (width, height) supplied by the host surface
    pub field: Vec2,
    /// Current phase
    pub phase: GamePhase,
    /// Mountains cleared this run
    pub score: u32,
    /// The bird
    pub player: Player,
    /// Active mountains, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Spawn cadence counter
    pub spawner: Spawner,
    /// Running ticks since the last start
    pub time_ticks: u64,
    /// Seed the RNG was created from
    pub seed: u64,
    /// Gameplay constants for this session (always validated)
    tuning: Tuning,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session waiting on the start screen
    pub fn new(
        field_width: f32,
        field_height: f32,
        tuning: Tuning,
        seed: u64,
    ) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            field: Vec2::new(field_width, field_height),
            phase: GamePhase::NotStarted,
            score: 0,
            player: Player::new(&tuning),
            obstacles: Vec::new(),
            spawner: Spawner::new(),
            time_ticks: 0,
            seed,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        })
    }

    /// Gameplay constants in effect
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Swap in new gameplay constants. Invalid values are rejected; valid ones
    /// are only honored between runs.
    pub fn set_tuning(&mut self, tuning: Tuning) -> Result<(), TuningError> {
        tuning.validate()?;
        if self.phase == GamePhase::Running {
            log::warn!("Tuning change ignored mid-run");
            return Ok(());
        }
        self.player.reset(&tuning);
        self.tuning = tuning;
        Ok(())
    }

    /// Begin a fresh run. Valid from `NotStarted` and `Ended`; ignored while running.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Running {
            log::warn!("start() ignored: run already in progress");
            return;
        }

        self.player.reset(&self.tuning);
        self.obstacles.clear();
        self.spawner.reset();
        self.score = 0;
        self.time_ticks = 0;
        self.events.push(GameEvent::ScoreChanged(0));
        self.set_phase(GamePhase::Running);

        log::info!("Run started (seed {})", self.seed);
    }

    /// The single "activate" signal: click, tap or space.
    ///
    /// Starts the game from the start screen, flaps while running and is
    /// ignored once the run has ended (restart has its own entry point).
    pub fn activate(&mut self) {
        match self.phase {
            GamePhase::NotStarted => self.start(),
            GamePhase::Running => self.player.flap(self.tuning.jump_impulse),
            GamePhase::Ended => {}
        }
    }

    /// Dedicated restart action (game-over screen button)
    pub fn restart(&mut self) {
        self.start();
    }

    /// End the run (terminal until restart)
    pub fn end(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.set_phase(GamePhase::Ended);
        log::info!(
            "Run ended after {} ticks with score {}",
            self.time_ticks,
            self.score
        );
    }

    /// Resize the play field. Only honored between runs.
    pub fn set_field_size(&mut self, width: f32, height: f32) {
        if self.phase == GamePhase::Running {
            log::warn!("Field resize to {}x{} ignored mid-run", width, height);
            return;
        }
        self.field = Vec2::new(width, height);
    }

    /// Mark a mountain as cleared and bump the score
    pub(crate) fn award_pass(&mut self) {
        self.score += 1;
        self.events.push(GameEvent::ScoreChanged(self.score));
    }

    /// Append a mountain at the right edge of the field
    fn spawn_obstacle(&mut self, height: f32) {
        self.obstacles.push(Obstacle::new(self.field.x, height));
        self.events.push(GameEvent::ObstacleSpawned { height });
        log::debug!("Spawned mountain (height {}), {} active", height, self.obstacles.len());
    }

    /// Remove the mountain at `index`, keeping the order of the rest
    pub(crate) fn retire_obstacle(&mut self, index: usize) {
        self.obstacles.remove(index);
        self.events.push(GameEvent::ObstacleRetired);
        log::debug!("Retired mountain, {} active", self.obstacles.len());
    }

    /// Advance the spawn cadence; a due mountain is appended at the right edge
    pub(crate) fn step_spawner(&mut self) {
        if let Some(height) = self.spawner.step(&self.tuning, &mut self.rng) {
            self.spawn_obstacle(height);
        }
    }

    fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    /// Take all notifications raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Owned copy for rendering and HUD updates
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            field: self.field,
            player_pos: self.player.pos,
            player_size: self.player.size,
            obstacle_width: self.tuning.obstacle_width,
            obstacles: self.obstacles.clone(),
            score: self.score,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn new_state() -> GameState {
        GameState::new(
            DEFAULT_FIELD_WIDTH,
            DEFAULT_FIELD_HEIGHT,
            Tuning::default(),
            12345,
        )
        .unwrap()
    }

    #[test]
    fn test_new_state_defaults() {
        let state = new_state();
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.pos, Vec2::new(PLAYER_X, PLAYER_START_Y));
        assert_eq!(state.player.velocity, 0.0);
    }

    #[test]
    fn test_activate_from_start_screen_starts() {
        let mut state = new_state();
        state.activate();
        assert_eq!(state.phase, GamePhase::Running);
        // Starting does not flap
        assert_eq!(state.player.velocity, 0.0);
    }

    #[test]
    fn test_activate_overwrites_velocity() {
        let mut state = new_state();
        state.start();

        for prior in [-20.0, -6.0, 0.0, 3.5, 40.0] {
            state.player.velocity = prior;
            state.activate();
            assert_eq!(state.player.velocity, JUMP_IMPULSE);
        }

        // Repeated flaps do not stack
        state.activate();
        state.activate();
        assert_eq!(state.player.velocity, JUMP_IMPULSE);
    }

    #[test]
    fn test_activate_ignored_after_end() {
        let mut state = new_state();
        state.start();
        state.end();
        state.player.velocity = 3.0;

        state.activate();
        assert_eq!(state.phase, GamePhase::Ended);
        assert_eq!(state.player.velocity, 3.0);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = new_state();
        state.start();
        state.score = 7;
        state.player.pos.y = 512.0;
        state.player.velocity = 9.0;
        state.obstacles.push(Obstacle::new(120.0, 250.0));
        state.spawner.frame_counter = 42;
        state.end();

        state.restart();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.spawner.frame_counter, 0);
        assert_eq!(state.player.pos.y, PLAYER_START_Y);
        assert_eq!(state.player.velocity, 0.0);
    }

    #[test]
    fn test_start_ignored_while_running() {
        let mut state = new_state();
        state.start();
        state.score = 3;
        state.start();
        assert_eq!(state.score, 3);
    }

    #[test]
    fn test_events_for_start_and_end() {
        let mut state = new_state();
        state.start();
        state.end();

        let events = state.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::ScoreChanged(0),
                GameEvent::PhaseChanged {
                    from: GamePhase::NotStarted,
                    to: GamePhase::Running
                },
                GameEvent::PhaseChanged {
                    from: GamePhase::Running,
                    to: GamePhase::Ended
                },
            ]
        );
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_field_resize_only_between_runs() {
        let mut state = new_state();
        state.set_field_size(800.0, 480.0);
        assert_eq!(state.field, Vec2::new(800.0, 480.0));

        state.start();
        state.set_field_size(1024.0, 768.0);
        assert_eq!(state.field, Vec2::new(800.0, 480.0));
    }

    #[test]
    fn test_snapshot_preserves_order() {
        let mut state = new_state();
        state.start();
        state.obstacles.push(Obstacle::new(10.0, 100.0));
        state.obstacles.push(Obstacle::new(200.0, 300.0));

        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Running);
        assert_eq!(snap.obstacle_width, OBSTACLE_WIDTH);
        assert_eq!(snap.obstacles[0].x, 10.0);
        assert_eq!(snap.obstacles[1].x, 200.0);
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let tuning = Tuning {
            obstacle_min_height: 300,
            obstacle_max_height: 100,
            spawn_interval: 1,
            ..Default::default()
        };
        let err = GameState::new(400.0, 600.0, tuning, 1).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "obstacle_min_height",
                ..
            }
        ));
    }

    #[test]
    fn test_set_tuning_rejects_invalid_values() {
        let mut state = new_state();
        let bad = Tuning {
            spawn_interval: 0,
            ..Default::default()
        };
        assert!(state.set_tuning(bad).is_err());
        assert_eq!(state.tuning().spawn_interval, SPAWN_INTERVAL);
    }

    #[test]
    fn test_set_tuning_between_runs_only() {
        let mut state = new_state();
        let tall_bird = Tuning {
            player_height: 120.0,
            ..Default::default()
        };
        state.set_tuning(tall_bird).unwrap();
        assert_eq!(state.player.size.y, 120.0);

        state.start();
        let slow = Tuning {
            gravity: 0.1,
            ..Default::default()
        };
        state.set_tuning(slow).unwrap();
        assert_eq!(state.tuning().gravity, GRAVITY);
        assert_eq!(state.tuning().player_height, 120.0);
    }

    #[test]
    fn test_spawner_follows_current_tuning() {
        let mut state = new_state();
        state
            .set_tuning(Tuning {
                spawn_interval: 5,
                ..Default::default()
            })
            .unwrap();
        state.start();

        for _ in 0..10 {
            state.step_spawner();
        }
        assert_eq!(state.obstacles.len(), 2);
        assert!(state.obstacles.iter().all(|o| o.x == DEFAULT_FIELD_WIDTH));
    }
}
