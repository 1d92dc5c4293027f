//! Periodic tick timers
//!
//! The controller owns one `Ticker`. A speed change stops it and starts it
//! again at the new interval, so the next tick never fires on the stale one.

/// Periodic timer driving `GameController::tick`
pub trait Ticker {
    /// (Re)start firing every `interval_ms`, replacing any running timer
    fn start(&mut self, interval_ms: u32);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

/// Timer driven by hand
///
/// Records every start so tests and the native demo can see reschedules.
#[derive(Debug, Clone, Default)]
pub struct ManualTicker {
    interval_ms: Option<u32>,
    starts: Vec<u32>,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interval of the running timer
    pub fn interval_ms(&self) -> Option<u32> {
        self.interval_ms
    }

    /// Intervals passed to `start`, oldest first
    pub fn starts(&self) -> &[u32] {
        &self.starts
    }
}

impl Ticker for ManualTicker {
    fn start(&mut self, interval_ms: u32) {
        self.interval_ms = Some(interval_ms);
        self.starts.push(interval_ms);
    }

    fn stop(&mut self) {
        self.interval_ms = None;
    }

    fn is_running(&self) -> bool {
        self.interval_ms.is_some()
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::IntervalTicker;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::Ticker;

    /// `setInterval` timer calling a JS function
    pub struct IntervalTicker {
        callback: Option<js_sys::Function>,
        handle: Option<i32>,
    }

    impl IntervalTicker {
        pub fn new() -> Self {
            Self {
                callback: None,
                handle: None,
            }
        }

        /// Function fired on every tick; takes effect on the next `start`
        pub fn set_callback(&mut self, callback: js_sys::Function) {
            self.callback = Some(callback);
        }
    }

    impl Default for IntervalTicker {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Ticker for IntervalTicker {
        fn start(&mut self, interval_ms: u32) {
            self.stop();
            let (Some(window), Some(callback)) = (web_sys::window(), self.callback.as_ref()) else {
                log::warn!("Cannot start tick timer: no window or callback");
                return;
            };
            match window
                .set_interval_with_callback_and_timeout_and_arguments_0(callback, interval_ms as i32)
            {
                Ok(handle) => self.handle = Some(handle),
                Err(e) => log::error!("setInterval failed: {:?}", e),
            }
        }

        fn stop(&mut self) {
            if let (Some(handle), Some(window)) = (self.handle.take(), web_sys::window()) {
                window.clear_interval_with_handle(handle);
            }
        }

        fn is_running(&self) -> bool {
            self.handle.is_some()
        }
    }
}
