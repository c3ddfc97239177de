//! Fixed timestep simulation tick
//!
//! Core game loop step. One call advances the run by exactly one frame.

use super::collision;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Click/tap/space since the last tick
    pub activate: bool,
    /// Restart button pressed on the game-over screen
    pub restart: bool,
    /// Demo mode - autopilot flaps for the player
    pub autopilot: bool,
}

/// Advance the game state by one fixed step
///
/// Order within a running tick: pending input, gravity and position, field
/// bounds, spawn cadence, then one pass over the mountains (scroll, score,
/// collide, retire). Leaving the field ends the run but still lets the spawn
/// cadence advance; the mountain pass is skipped. A collision stops the pass.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart && state.phase == GamePhase::Ended {
        state.restart();
    }

    if input.activate || (input.autopilot && autopilot_wants_flap(state)) {
        state.activate();
    }

    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    // Physics
    state.player.integrate(state.tuning().gravity);

    // Field bounds
    let escaped = collision::out_of_bounds(&state.player, state.field.y);
    if escaped {
        state.end();
    }

    // Spawn cadence
    state.step_spawner();

    if !escaped {
        advance_obstacles(state);
    }
}

/// Scroll, score, collide and retire every mountain in spawn order
fn advance_obstacles(state: &mut GameState) {
    let tuning = state.tuning();
    let width = tuning.obstacle_width;
    let speed = tuning.scroll_speed;
    let padding = tuning.hitbox_padding;
    let field_height = state.field.y;

    let mut i = 0;
    while i < state.obstacles.len() {
        let (scored, hit, gone) = {
            let obstacle = &mut state.obstacles[i];
            obstacle.x -= speed;

            let scored = collision::newly_passed(obstacle, width, &state.player);
            if scored {
                obstacle.passed = true;
            }
            let hit = collision::collides(&state.player, obstacle, width, field_height, padding);
            (scored, hit, collision::offscreen(obstacle, width))
        };

        if scored {
            state.award_pass();
        }

        if hit {
            state.end();
            return;
        }

        if gone {
            // Same index now holds the next mountain
            state.retire_obstacle(i);
        } else {
            i += 1;
        }
    }
}

/// Flap when falling and the bird's feet drop below the next mountain's peak
/// (or below 60% of the field when the sky is clear)
fn autopilot_wants_flap(state: &GameState) -> bool {
    if state.phase != GamePhase::Running || state.player.velocity <= 0.0 {
        return false;
    }

    let field_height = state.field.y;
    let threshold = state
        .obstacles
        .iter()
        .find(|o| !o.passed)
        .map(|o| o.top(field_height))
        .unwrap_or(field_height * 0.6);

    state.player.bottom() > threshold
}
