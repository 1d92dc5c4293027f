//! Scene drawing: board, food and snake
//!
//! Reads the game state only; the surface receives every pixel.

use glam::Vec2;

use super::assets::Sprites;
use super::surface::{Color, Fill, RenderSurface};
use crate::sim::{Cell, GameState};

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(0xf8, 0xf9, 0xfa);
    pub const GRID: Color = Color::rgb(0xe9, 0xec, 0xef);
    pub const FOOD: Color = Color::rgb(0xff, 0x6b, 0x9d);
    pub const SNAKE_START: Color = Color::rgb(0x66, 0x7e, 0xea);
    pub const SNAKE_END: Color = Color::rgb(0x76, 0x4b, 0xa2);
    /// Outline around the textured head
    pub const HEAD_OUTLINE: Color = SNAKE_START;
}

pub const GRID_LINE_WIDTH: f32 = 0.5;
pub const OUTLINE_WIDTH: f32 = 2.0;
/// Drawn in place of the food texture
pub const FOOD_GLYPH: &str = "💕";

/// Top-left pixel of a cell
fn cell_origin(cell: Cell, cell_px: f32) -> Vec2 {
    Vec2::new(cell.x as f32, cell.y as f32) * cell_px
}

/// Center pixel of a cell
fn cell_center(cell: Cell, cell_px: f32) -> Vec2 {
    cell_origin(cell, cell_px) + Vec2::splat(cell_px / 2.0)
}

/// Radius of the round glyph drawn in a cell (1 px gap to the grid)
fn token_radius(cell_px: f32) -> f32 {
    cell_px / 2.0 - 1.0
}

/// Draw the whole frame
pub fn draw<S: RenderSurface>(surface: &mut S, state: &GameState, sprites: &Sprites<S::Image>) {
    let cell_px = state.config.cell_px as f32;
    let board_px = state.config.board_px() as f32;

    surface.fill_rect(Vec2::ZERO, Vec2::splat(board_px), colors::BACKGROUND);
    draw_grid(surface, state.config.tile_count, cell_px, board_px);

    if let Some(food) = state.food {
        draw_food(surface, food, cell_px, sprites);
    }

    for (index, segment) in state.snake.iter().enumerate() {
        match sprites.ready_head().filter(|_| index == 0) {
            Some(image) => draw_textured_token(surface, image, segment, cell_px, colors::HEAD_OUTLINE),
            None => draw_body_segment(surface, segment, cell_px),
        }
    }
}

fn draw_grid<S: RenderSurface>(surface: &mut S, tile_count: u32, cell_px: f32, board_px: f32) {
    for i in 0..tile_count {
        let offset = i as f32 * cell_px;
        surface.stroke_line(
            Vec2::new(offset, 0.0),
            Vec2::new(offset, board_px),
            colors::GRID,
            GRID_LINE_WIDTH,
        );
        surface.stroke_line(
            Vec2::new(0.0, offset),
            Vec2::new(board_px, offset),
            colors::GRID,
            GRID_LINE_WIDTH,
        );
    }
}

fn draw_food<S: RenderSurface>(
    surface: &mut S,
    food: Cell,
    cell_px: f32,
    sprites: &Sprites<S::Image>,
) {
    match sprites.ready_food() {
        Some(image) => draw_textured_token(surface, image, food, cell_px, colors::FOOD),
        None => {
            // Baseline sits 2 px above the bottom of the cell
            let baseline = cell_origin(food, cell_px) + Vec2::new(0.0, cell_px - 2.0);
            surface.fill_text(FOOD_GLYPH, baseline, cell_px, colors::FOOD);
        }
    }
}

/// Image clipped to a circle, then outlined
fn draw_textured_token<S: RenderSurface>(
    surface: &mut S,
    image: &S::Image,
    cell: Cell,
    cell_px: f32,
    outline: Color,
) {
    let center = cell_center(cell, cell_px);
    let radius = token_radius(cell_px);

    surface.clip_circle(center, radius);
    surface.draw_image(image, cell_origin(cell, cell_px), Vec2::splat(cell_px));
    surface.restore();
    surface.stroke_circle(center, radius, outline, OUTLINE_WIDTH);
}

/// Gradient runs diagonally across the segment's own cell
fn draw_body_segment<S: RenderSurface>(surface: &mut S, cell: Cell, cell_px: f32) {
    let origin = cell_origin(cell, cell_px);
    let fill = Fill::LinearGradient {
        from: origin,
        to: origin + Vec2::splat(cell_px),
        start: colors::SNAKE_START,
        end: colors::SNAKE_END,
    };
    surface.fill_circle(cell_center(cell, cell_px), token_radius(cell_px), fill);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{DrawCommand, RecordingSurface, RecordedImage};
    use crate::settings::GameConfig;
    use crate::sim::{Direction, Snake};

    fn sample_state() -> GameState {
        let snake = Snake::from_cells([Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)]).unwrap();
        let mut state = GameState::with_snake(GameConfig::default(), 11, snake);
        state.set_food(Cell::new(8, 2));
        state.direction = Direction::RIGHT;
        state
    }

    fn count(surface: &RecordingSurface, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        surface.commands().iter().filter(|c| pred(c)).count()
    }

    #[test]
    fn test_frame_starts_with_background_and_grid() {
        let mut surface = RecordingSurface::new();
        let state = sample_state();
        draw(&mut surface, &state, &Sprites::default());

        assert_eq!(
            surface.commands()[0],
            DrawCommand::FillRect {
                pos: Vec2::ZERO,
                size: Vec2::splat(400.0),
                color: colors::BACKGROUND,
            }
        );
        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::StrokeLine { .. })), 40);
    }

    #[test]
    fn test_fallback_glyphs_without_images() {
        let mut surface = RecordingSurface::new();
        let state = sample_state();
        draw(&mut surface, &state, &Sprites::default());

        assert!(surface.commands().contains(&DrawCommand::FillText {
            text: FOOD_GLYPH.to_string(),
            pos: Vec2::new(160.0, 58.0),
            font_px: 20.0,
            color: colors::FOOD,
        }));
        // Every segment, head included, uses the gradient fill
        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::FillCircle { .. })), 3);
        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::DrawImage { .. })), 0);
    }

    #[test]
    fn test_textured_head_and_food() {
        let mut surface = RecordingSurface::new();
        let state = sample_state();
        let sprites = Sprites::new(Some(RecordedImage::ready("head")), Some(RecordedImage::ready("food")));
        draw(&mut surface, &state, &sprites);

        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::DrawImage { .. })), 2);
        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::FillCircle { .. })), 2);
        assert!(surface.commands().contains(&DrawCommand::StrokeCircle {
            center: Vec2::new(110.0, 110.0),
            radius: 9.0,
            color: colors::HEAD_OUTLINE,
            width: OUTLINE_WIDTH,
        }));
        assert_eq!(surface.clip_depth(), 0);
    }

    #[test]
    fn test_broken_image_falls_back() {
        let mut surface = RecordingSurface::new();
        let state = sample_state();
        let sprites = Sprites::new(Some(RecordedImage::broken("head")), Some(RecordedImage::broken("food")));
        draw(&mut surface, &state, &sprites);

        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::DrawImage { .. })), 0);
        assert_eq!(count(&surface, |c| matches!(c, DrawCommand::FillText { .. })), 1);
    }

    #[test]
    fn test_draw_does_not_touch_state() {
        let mut surface = RecordingSurface::new();
        let state = sample_state();
        let before = (state.snake.clone(), state.food, state.score, state.speed_ms);
        draw(&mut surface, &state, &Sprites::default());
        assert_eq!(before, (state.snake.clone(), state.food, state.score, state.speed_ms));
    }
}
