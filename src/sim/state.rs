//! Game state and core simulation types

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::food::place_food;
use crate::settings::GameConfig;

/// A grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbour one step along `dir`
    pub fn offset(self, dir: Direction) -> Self {
        Self {
            x: self.x + dir.dx,
            y: self.y + dir.dy,
        }
    }

    /// Whether the cell lies on a `tile_count` x `tile_count` board
    pub fn in_bounds(self, tile_count: i32) -> bool {
        (0..tile_count).contains(&self.x) && (0..tile_count).contains(&self.y)
    }
}

/// Movement vector in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    /// Not moving yet
    pub const NONE: Self = Self { dx: 0, dy: 0 };
    pub const UP: Self = Self { dx: 0, dy: -1 };
    pub const DOWN: Self = Self { dx: 0, dy: 1 };
    pub const LEFT: Self = Self { dx: -1, dy: 0 };
    pub const RIGHT: Self = Self { dx: 1, dy: 0 };

    /// Build from a raw pair, `None` unless it is one of the five allowed vectors
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, 0) | (1, 0) | (-1, 0) | (0, 1) | (0, -1) => Some(Self { dx, dy }),
            _ => None,
        }
    }

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Whether `other` would send the snake straight back through its neck
    pub fn is_reversed_by(self, other: Direction) -> bool {
        (other.dx != 0 && other.dx == -self.dx) || (other.dy != 0 && other.dy == -self.dy)
    }
}

/// Snake body, head first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// One-segment snake
    pub fn new(head: Cell) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    /// Snake from cells listed head first
    ///
    /// Returns `None` for an empty list.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        (!body.is_empty()).then_some(Self { body })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake has at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Segments head first
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    pub(crate) fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Head left the board
    Wall,
    /// Head ran into the body
    SelfCollision,
    /// Snake covers every cell, nowhere left for food
    BoardFull,
}

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first direction
    Ready,
    /// Snake is moving
    Playing,
    /// Run ended
    GameOver(EndReason),
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Tuning in effect for this run
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub snake: Snake,
    /// Food cell, `None` only once the board is full
    pub food: Option<Cell>,
    pub direction: Direction,
    pub score: u32,
    /// Tick interval (ms)
    pub speed_ms: u32,
    pub phase: GamePhase,
    /// A direction change was accepted since the last tick
    pub(crate) direction_changed: bool,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh run: one segment at the board center, not moving, random food
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let center = (config.tile_count / 2) as i32;
        let snake = Snake::new(Cell::new(center, center));
        Self::with_snake(config, seed, snake)
    }

    /// Run starting from a given body (not moving, random food)
    pub fn with_snake(config: GameConfig, seed: u64, snake: Snake) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let food = place_food(
            &snake,
            config.tile_count as i32,
            config.food_sample_attempts,
            &mut rng,
        );
        Self {
            config,
            seed,
            snake,
            food,
            direction: Direction::NONE,
            score: 0,
            speed_ms: config.initial_speed_ms,
            phase: GamePhase::Ready,
            direction_changed: false,
            rng,
        }
    }

    pub fn tile_count(&self) -> i32 {
        self.config.tile_count as i32
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    /// Place food explicitly (used by scenarios and tests)
    ///
    /// Ignored if the cell is off the board or on the snake.
    pub fn set_food(&mut self, cell: Cell) -> bool {
        if !cell.in_bounds(self.tile_count()) || self.snake.contains(cell) {
            return false;
        }
        self.food = Some(cell);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_centered_and_idle() {
        let state = GameState::new(GameConfig::default(), 7);
        assert_eq!(state.snake.head(), Cell::new(10, 10));
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.direction, Direction::NONE);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed_ms, 150);
        assert_eq!(state.phase, GamePhase::Ready);

        let food = state.food.unwrap();
        assert!(food.in_bounds(state.tile_count()));
        assert!(!state.snake.contains(food));
    }

    #[test]
    fn test_same_seed_same_food() {
        let a = GameState::new(GameConfig::default(), 42);
        let b = GameState::new(GameConfig::default(), 42);
        assert_eq!(a.food, b.food);
    }

    #[test]
    fn test_direction_from_delta() {
        assert_eq!(Direction::from_delta(1, 0), Some(Direction::RIGHT));
        assert_eq!(Direction::from_delta(0, 0), Some(Direction::NONE));
        assert_eq!(Direction::from_delta(1, 1), None);
        assert_eq!(Direction::from_delta(2, 0), None);
    }

    #[test]
    fn test_reversal_detection() {
        assert!(Direction::RIGHT.is_reversed_by(Direction::LEFT));
        assert!(Direction::UP.is_reversed_by(Direction::DOWN));
        assert!(!Direction::RIGHT.is_reversed_by(Direction::UP));
        assert!(!Direction::RIGHT.is_reversed_by(Direction::RIGHT));
        assert!(!Direction::NONE.is_reversed_by(Direction::LEFT));
    }

    #[test]
    fn test_set_food_rejects_snake_cells() {
        let mut state = GameState::new(GameConfig::default(), 1);
        let head = state.snake.head();
        assert!(!state.set_food(head));
        assert!(!state.set_food(Cell::new(-1, 3)));
        assert!(state.set_food(Cell::new(0, 0)));
        assert_eq!(state.food, Some(Cell::new(0, 0)));
    }

    #[test]
    fn test_snake_from_cells() {
        assert!(Snake::from_cells(Vec::new()).is_none());
        let snake = Snake::from_cells([Cell::new(2, 2), Cell::new(1, 2)]).unwrap();
        assert_eq!(snake.head(), Cell::new(2, 2));
        assert_eq!(snake.len(), 2);
    }
}
