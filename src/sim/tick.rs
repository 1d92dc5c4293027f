//! Discrete tick
//!
//! Advances the game by one cell and gates direction changes.

use super::food::place_food;
use super::state::{Direction, EndReason, GamePhase, GameState};

/// What a single `step` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not moving yet, or the run already ended
    Idle,
    /// Moved one cell
    Moved,
    /// Ate food and grew; `speed_changed` asks for a timer reschedule
    Ate { speed_changed: bool },
    /// Run ended this tick
    GameOver(EndReason),
}

impl StepOutcome {
    pub fn is_terminal(self) -> bool {
        matches!(self, StepOutcome::GameOver(_))
    }
}

/// Request a direction change for the next step
///
/// Rejected when it reverses the current motion or a change was already
/// accepted this tick. A rejected reversal leaves the tick's change unused.
pub fn set_direction(state: &mut GameState, dir: Direction) -> bool {
    if dir.is_none() || state.is_over() {
        return false;
    }
    if state.direction_changed {
        log::debug!("Direction {:?} ignored, already turned this tick", dir);
        return false;
    }
    if state.direction.is_reversed_by(dir) {
        log::debug!("Direction {:?} ignored, would reverse", dir);
        return false;
    }

    state.direction = dir;
    state.direction_changed = true;
    true
}

/// Advance the game by one tick
pub fn step(state: &mut GameState) -> StepOutcome {
    state.direction_changed = false;

    if state.is_over() || state.direction.is_none() {
        return StepOutcome::Idle;
    }
    state.phase = GamePhase::Playing;

    let head = state.snake.head().offset(state.direction);

    if !head.in_bounds(state.tile_count()) {
        return end(state, EndReason::Wall);
    }
    if state.snake.contains(head) {
        return end(state, EndReason::SelfCollision);
    }

    state.snake.push_head(head);

    if state.food != Some(head) {
        state.snake.drop_tail();
        return StepOutcome::Moved;
    }

    state.score += 1;
    let speed_changed = speed_up(state);

    let tile_count = state.tile_count();
    state.food = place_food(
        &state.snake,
        tile_count,
        state.config.food_sample_attempts,
        &mut state.rng,
    );
    if state.food.is_none() {
        return end(state, EndReason::BoardFull);
    }

    StepOutcome::Ate { speed_changed }
}

/// Shorten the tick interval on every `speed_up_every` points until the floor
fn speed_up(state: &mut GameState) -> bool {
    let config = &state.config;
    if state.score % config.speed_up_every != 0 || state.speed_ms <= config.min_speed_ms {
        return false;
    }
    let old = state.speed_ms;
    state.speed_ms = old
        .saturating_sub(config.speed_step_ms)
        .max(config.min_speed_ms);
    if state.speed_ms == old {
        return false;
    }
    log::debug!("Speed up: {} ms per tick at score {}", state.speed_ms, state.score);
    true
}

fn end(state: &mut GameState, reason: EndReason) -> StepOutcome {
    state.phase = GamePhase::GameOver(reason);
    log::info!("Game over ({:?}) with score {}", reason, state.score);
    StepOutcome::GameOver(reason)
}
