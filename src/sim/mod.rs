//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - One cell per tick, driven by the caller's timer
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod food;
pub mod state;
pub mod tick;

pub use food::place_food;
pub use state::{Cell, Direction, EndReason, GamePhase, GameState, Snake};
pub use tick::{StepOutcome, set_direction, step};

impl GameState {
    /// See [`tick::set_direction`]
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        tick::set_direction(self, dir)
    }

    /// See [`tick::step`]
    pub fn step(&mut self) -> StepOutcome {
        tick::step(self)
    }
}
