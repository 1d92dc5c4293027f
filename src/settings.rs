//! Game tuning
//!
//! Defaults reproduce the classic pacing. Overrides can be stored as JSON in
//! the persistence backend; anything invalid falls back to defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::persistence::PersistenceBackend;

/// Reasons a configuration is rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tile_count must be at least 2, got {0}")]
    GridTooSmall(u32),
    #[error("tile_count ({got}) exceeds the maximum of {max}")]
    GridTooLarge { got: u32, max: u32 },
    #[error("cell_px must be non-zero")]
    ZeroCellSize,
    #[error("cell_px ({got}) exceeds the maximum of {max}")]
    CellTooLarge { got: u32, max: u32 },
    #[error("min_speed_ms ({min}) must not exceed initial_speed_ms ({initial})")]
    SpeedFloorAboveStart { min: u32, initial: u32 },
    #[error("min_speed_ms must be non-zero")]
    ZeroSpeedFloor,
    #[error("speed_up_every must be non-zero")]
    ZeroSpeedUpInterval,
}

/// Gameplay tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side of the square board
    pub tile_count: u32,
    /// Pixel size of one cell
    pub cell_px: u32,
    /// Tick interval at the start of a run (ms)
    pub initial_speed_ms: u32,
    /// Fastest tick interval (ms)
    pub min_speed_ms: u32,
    /// Interval reduction per speed-up (ms)
    pub speed_step_ms: u32,
    /// Speed up every this many points
    pub speed_up_every: u32,
    /// Random picks before food placement scans the free cells
    pub food_sample_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: MAX_CANVAS_PX / CELL_PX,
            cell_px: CELL_PX,
            initial_speed_ms: INITIAL_SPEED_MS,
            min_speed_ms: MIN_SPEED_MS,
            speed_step_ms: SPEED_STEP_MS,
            speed_up_every: SPEED_UP_EVERY,
            food_sample_attempts: FOOD_SAMPLE_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Storage key for overrides
    pub const STORAGE_KEY: &'static str = "snakeConfigV1";

    /// Fit the board to a square canvas of `canvas_px` pixels
    pub fn for_canvas(mut self, canvas_px: u32) -> Self {
        if self.cell_px > 0 {
            let tile_count = (canvas_px / self.cell_px).clamp(2, MAX_TILE_COUNT);
            if tile_count != self.tile_count {
                log::debug!(
                    "Board resized to the canvas: {} -> {} tiles",
                    self.tile_count,
                    tile_count
                );
            }
            self.tile_count = tile_count;
        }
        self
    }

    /// Board edge in pixels, saturating for configs that fail `validate`
    pub fn board_px(&self) -> u32 {
        self.tile_count.saturating_mul(self.cell_px)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_count < 2 {
            return Err(ConfigError::GridTooSmall(self.tile_count));
        }
        if self.tile_count > MAX_TILE_COUNT {
            return Err(ConfigError::GridTooLarge {
                got: self.tile_count,
                max: MAX_TILE_COUNT,
            });
        }
        if self.cell_px == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.cell_px > MAX_CELL_PX {
            return Err(ConfigError::CellTooLarge {
                got: self.cell_px,
                max: MAX_CELL_PX,
            });
        }
        if self.min_speed_ms == 0 {
            return Err(ConfigError::ZeroSpeedFloor);
        }
        if self.min_speed_ms > self.initial_speed_ms {
            return Err(ConfigError::SpeedFloorAboveStart {
                min: self.min_speed_ms,
                initial: self.initial_speed_ms,
            });
        }
        if self.speed_up_every == 0 {
            return Err(ConfigError::ZeroSpeedUpInterval);
        }
        Ok(())
    }

    /// Load overrides from the backend, falling back to defaults
    pub fn load(backend: &impl PersistenceBackend) -> Self {
        let Some(json) = backend.get(Self::STORAGE_KEY) else {
            log::info!("Using default game config");
            return Self::default();
        };

        match serde_json::from_str::<GameConfig>(&json) {
            Ok(config) => match config.validate() {
                Ok(()) => {
                    log::info!("Loaded game config overrides");
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring invalid game config: {e}");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Ignoring unreadable game config: {e}");
                Self::default()
            }
        }
    }
}
