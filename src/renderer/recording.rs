//! Headless surface that records draw calls
//!
//! Used by tests and the native demo to inspect frames without a canvas.

use glam::Vec2;

use super::surface::{Color, Fill, ImageSource, RenderSurface};

/// Stand-in image with a fixed load result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedImage {
    pub label: String,
    pub ready: bool,
}

impl RecordedImage {
    pub fn ready(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ready: true,
        }
    }

    /// Image whose load failed or produced a zero-sized placeholder
    pub fn broken(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ready: false,
        }
    }
}

impl ImageSource for RecordedImage {
    fn is_ready(&self) -> bool {
        self.ready
    }
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { pos: Vec2, size: Vec2, color: Color },
    StrokeLine { from: Vec2, to: Vec2, color: Color, width: f32 },
    FillCircle { center: Vec2, radius: f32, fill: Fill },
    StrokeCircle { center: Vec2, radius: f32, color: Color, width: f32 },
    ClipCircle { center: Vec2, radius: f32 },
    Restore,
    DrawImage { label: String, pos: Vec2, size: Vec2 },
    FillText { text: String, pos: Vec2, font_px: f32, color: Color },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    clip_depth: usize,
    frames: u32,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands since the last background clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Frames started (a full-surface fill at the origin starts a frame)
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Open clip regions not yet restored
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }
}

impl RenderSurface for RecordingSurface {
    type Image = RecordedImage;

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        if pos == Vec2::ZERO {
            self.commands.clear();
            self.frames += 1;
        }
        self.commands.push(DrawCommand::FillRect { pos, size, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokeLine { from, to, color, width });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Fill) {
        self.commands.push(DrawCommand::FillCircle { center, radius, fill });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }

    fn clip_circle(&mut self, center: Vec2, radius: f32) {
        self.clip_depth += 1;
        self.commands.push(DrawCommand::ClipCircle { center, radius });
    }

    fn restore(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }

    fn draw_image(&mut self, image: &RecordedImage, pos: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::DrawImage {
            label: image.label.clone(),
            pos,
            size,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font_px: f32, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            pos,
            font_px,
            color,
        });
    }
}
