//! Heart Snake - grid Snake for the browser canvas
//!
//! Core modules:
//! - `sim`: Game state, stepping, collisions and food placement
//! - `highscores`: Persistent top-10 ranking
//! - `renderer`: Draws a game state onto an abstract 2D surface
//! - `platform`: Input mapping and tick timers
//! - `persistence`: Key-value storage backends (LocalStorage on web)
//! - `settings`: Data-driven game tuning

pub mod controller;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use controller::{GameController, GameOver};
pub use highscores::{RankingEntry, RankingStore};
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Pixel size of one grid cell
    pub const CELL_PX: u32 = 20;
    /// Largest canvas edge in pixels
    pub const MAX_CANVAS_PX: u32 = 400;
    /// Largest accepted board side (cells)
    pub const MAX_TILE_COUNT: u32 = 1000;
    /// Largest accepted cell size (px)
    pub const MAX_CELL_PX: u32 = 256;
    /// Horizontal space kept free around the canvas on narrow viewports
    pub const CANVAS_MARGIN_PX: u32 = 40;

    /// Tick interval at the start of a run (ms)
    pub const INITIAL_SPEED_MS: u32 = 150;
    /// Fastest allowed tick interval (ms)
    pub const MIN_SPEED_MS: u32 = 80;
    /// Interval reduction per speed-up (ms)
    pub const SPEED_STEP_MS: u32 = 10;
    /// Speed up every this many points
    pub const SPEED_UP_EVERY: u32 = 5;

    /// Random picks tried before food placement scans the free cells
    pub const FOOD_SAMPLE_ATTEMPTS: u32 = 64;

    /// Minimum finger travel (px) for a touch to count as a swipe
    pub const SWIPE_DEADZONE_PX: f32 = 10.0;

    /// Name recorded when the player leaves the field empty
    pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";
}

/// Canvas edge length for a viewport width: `min(width - margin, MAX_CANVAS_PX)`
#[inline]
pub fn canvas_size_for_viewport(viewport_width: f64) -> u32 {
    let available = (viewport_width - consts::CANVAS_MARGIN_PX as f64).max(0.0);
    (available as u32).min(consts::MAX_CANVAS_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size_clamps_to_max() {
        assert_eq!(canvas_size_for_viewport(1920.0), 400);
        assert_eq!(canvas_size_for_viewport(360.0), 320);
        assert_eq!(canvas_size_for_viewport(10.0), 0);
    }
}
