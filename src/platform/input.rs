//! Raw input to direction requests
//!
//! Keyboard, on-screen buttons and swipes all end in
//! `DirectionSink::set_direction`, so the reversal and once-per-tick guards
//! apply to every path.

use glam::Vec2;

use crate::consts::SWIPE_DEADZONE_PX;
use crate::sim::{Direction, GameState};

/// Anything that accepts direction requests
pub trait DirectionSink {
    /// Returns whether the change was accepted
    fn set_direction(&mut self, dir: Direction) -> bool;
}

impl DirectionSink for GameState {
    fn set_direction(&mut self, dir: Direction) -> bool {
        crate::sim::set_direction(self, dir)
    }
}

/// On-screen directional buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    Up,
    Down,
    Left,
    Right,
}

impl ControlButton {
    pub fn direction(self) -> Direction {
        match self {
            ControlButton::Up => Direction::UP,
            ControlButton::Down => Direction::DOWN,
            ControlButton::Left => Direction::LEFT,
            ControlButton::Right => Direction::RIGHT,
        }
    }
}

/// Input events in platform-neutral form
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent<'a> {
    /// Key press, `key` as in `KeyboardEvent.key`
    Key { key: &'a str, in_text_field: bool },
    Button(ControlButton),
    /// Finger down, client coordinates
    TouchStart(Vec2),
    /// Finger up, client coordinates
    TouchEnd(Vec2),
}

/// What the platform layer should do with the event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputResponse {
    /// Direction requested, if the event mapped to one
    pub direction: Option<Direction>,
    /// The sink accepted the request
    pub accepted: bool,
    /// Suppress the browser's default action (scrolling on arrow keys)
    pub prevent_default: bool,
}

/// Arrow keys and WASD
pub fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::UP),
        "ArrowDown" | "s" | "S" => Some(Direction::DOWN),
        "ArrowLeft" | "a" | "A" => Some(Direction::LEFT),
        "ArrowRight" | "d" | "D" => Some(Direction::RIGHT),
        _ => None,
    }
}

/// Tracks one touch from start to release
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start: Option<Vec2>,
}

impl SwipeTracker {
    pub fn begin(&mut self, pos: Vec2) {
        self.start = Some(pos);
    }

    /// Dominant axis of the displacement wins, ties go vertical
    ///
    /// Releases without a start, or shorter than the deadzone, are taps.
    pub fn finish(&mut self, pos: Vec2) -> Option<Direction> {
        let delta = pos - self.start.take()?;
        let travel = delta.abs();
        if travel.max_element() < SWIPE_DEADZONE_PX {
            return None;
        }

        if travel.x > travel.y {
            Some(if delta.x > 0.0 { Direction::RIGHT } else { Direction::LEFT })
        } else {
            Some(if delta.y > 0.0 { Direction::DOWN } else { Direction::UP })
        }
    }
}

#[derive(Debug, Default)]
pub struct InputController {
    swipe: SwipeTracker,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map an event and forward any direction to `sink`
    pub fn handle(&mut self, event: InputEvent<'_>, sink: &mut impl DirectionSink) -> InputResponse {
        let (direction, prevent_default) = match event {
            InputEvent::Key { in_text_field: true, .. } => (None, false),
            InputEvent::Key { key, .. } => {
                let dir = key_direction(key);
                (dir, dir.is_some())
            }
            InputEvent::Button(button) => (Some(button.direction()), false),
            InputEvent::TouchStart(pos) => {
                self.swipe.begin(pos);
                (None, false)
            }
            InputEvent::TouchEnd(pos) => (self.swipe.finish(pos), false),
        };

        let accepted = direction.is_some_and(|dir| sink.set_direction(dir));
        InputResponse {
            direction,
            accepted,
            prevent_default,
        }
    }
}
