//! Image assets used by the scene
//!
//! Loads are fire-and-forget. Success and failure both settle an asset, so
//! the game becomes playable even when every image fails; the scene then
//! falls back to drawn glyphs.

use super::surface::ImageSource;

/// Head and food textures
#[derive(Debug, Clone)]
pub struct Sprites<I> {
    pub head: Option<I>,
    pub food: Option<I>,
}

impl<I> Default for Sprites<I> {
    fn default() -> Self {
        Self {
            head: None,
            food: None,
        }
    }
}

impl<I: ImageSource> Sprites<I> {
    pub fn new(head: Option<I>, food: Option<I>) -> Self {
        Self { head, food }
    }

    /// Head texture, if it loaded
    pub fn ready_head(&self) -> Option<&I> {
        self.head.as_ref().filter(|img| img.is_ready())
    }

    /// Food texture, if it loaded
    pub fn ready_food(&self) -> Option<&I> {
        self.food.as_ref().filter(|img| img.is_ready())
    }
}

/// Counts settled asset loads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadProgress {
    expected: u32,
    loaded: u32,
    failed: u32,
}

impl LoadProgress {
    pub fn new(expected: u32) -> Self {
        Self {
            expected,
            ..Self::default()
        }
    }

    pub fn mark_loaded(&mut self) {
        self.loaded += 1;
    }

    pub fn mark_failed(&mut self, url: &str) {
        log::warn!("Failed to load image {url}, using fallback glyph");
        self.failed += 1;
    }

    pub fn settled(&self) -> u32 {
        self.loaded + self.failed
    }

    pub fn failed(&self) -> u32 {
        self.failed
    }

    /// Every expected asset either loaded or failed
    pub fn is_ready(&self) -> bool {
        self.settled() >= self.expected
    }
}
