//! Drawing primitives the scene needs from a 2D surface

use glam::Vec2;

/// sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#667eea`
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fill style for circles
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Solid(Color),
    /// Two-stop linear gradient from `from` (stop 0) to `to` (stop 1)
    LinearGradient {
        from: Vec2,
        to: Vec2,
        start: Color,
        end: Color,
    },
}

/// An image handle owned by the surface's platform
pub trait ImageSource {
    /// Finished loading with a nonzero natural size
    ///
    /// A broken or placeholder image can report complete with zero size, so
    /// both are required.
    fn is_ready(&self) -> bool;
}

/// Immediate-mode 2D drawing target
pub trait RenderSurface {
    type Image: ImageSource;

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Fill);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32);
    /// Push state and restrict drawing to a circle until `restore`
    fn clip_circle(&mut self, center: Vec2, radius: f32);
    fn restore(&mut self);
    fn draw_image(&mut self, image: &Self::Image, pos: Vec2, size: Vec2);
    /// Draw text with its baseline at `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, font_px: f32, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_css() {
        assert_eq!(Color::rgb(0x66, 0x7e, 0xea).to_css(), "#667eea");
        assert_eq!(Color::rgb(0, 0, 0).to_css(), "#000000");
    }
}
