//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Tick timers (`setInterval` on web)
//! - Input events (keyboard, buttons, swipes)
//!
//! Storage lives in `crate::persistence`.

pub mod input;
pub mod timer;

pub use input::{ControlButton, DirectionSink, InputController, InputEvent, InputResponse};
#[cfg(target_arch = "wasm32")]
pub use timer::IntervalTicker;
pub use timer::{ManualTicker, Ticker};
