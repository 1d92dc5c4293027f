//! Canvas 2D surface (wasm32)

use std::f64::consts::TAU;

use glam::Vec2;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::surface::{Color, Fill, ImageSource, RenderSurface};

impl ImageSource for HtmlImageElement {
    fn is_ready(&self) -> bool {
        self.complete() && self.natural_width() > 0
    }
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::warn!("Canvas arc failed: {:?}", e);
        }
        self.ctx.close_path();
    }
}

impl RenderSurface for CanvasSurface {
    type Image = HtmlImageElement;

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Fill) {
        match fill {
            Fill::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Fill::LinearGradient {
                from,
                to,
                start,
                end,
            } => {
                let gradient = self.ctx.create_linear_gradient(
                    from.x as f64,
                    from.y as f64,
                    to.x as f64,
                    to.y as f64,
                );
                let _ = gradient.add_color_stop(0.0, &start.to_css());
                let _ = gradient.add_color_stop(1.0, &end.to_css());
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, width: f32) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.circle_path(center, radius);
        self.ctx.stroke();
    }

    fn clip_circle(&mut self, center: Vec2, radius: f32) {
        self.ctx.save();
        self.circle_path(center, radius);
        self.ctx.clip();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn draw_image(&mut self, image: &HtmlImageElement, pos: Vec2, size: Vec2) {
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            pos.x as f64,
            pos.y as f64,
            size.x as f64,
            size.y as f64,
        ) {
            log::warn!("drawImage failed: {:?}", e);
        }
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font_px: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&format!("{}px Arial", font_px));
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }
}
