use glam::{IVec2, UVec2, Vec2};

use crate::constants::TILE_SIZE;
use crate::render::Rect;

/// Space around the board reserved for host chrome (title bar, HUD, padding).
pub const CHROME: UVec2 = UVec2::new(16, 120);

/// Largest presentation scale.
pub const MAX_SCALE: f32 = 2.0;

/// Maps logical board pixels onto surface pixels.
///
/// Purely presentational: resizing changes the scale, never the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scale: f32,
    size: UVec2,
}

impl Viewport {
    /// A viewport drawing `board` logical pixels at `scale`.
    pub fn new(board: Vec2, scale: f32) -> Self {
        let scale = if scale.is_finite() { scale.max(0.0) } else { 0.0 };
        Self {
            scale,
            size: (board * scale).floor().max(Vec2::ONE).as_uvec2(),
        }
    }

    /// Largest scale, up to [`MAX_SCALE`], at which `board` fits in `container`
    /// once [`CHROME`] is taken out.
    pub fn fit(container: UVec2, board: Vec2) -> Self {
        let available = container.saturating_sub(CHROME).as_vec2();
        let scale = (available / board.max(Vec2::ONE)).min_element().min(MAX_SCALE);
        Self::new(board, scale)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Output size, in surface pixels, never below one pixel on either axis.
    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Converts a length in logical pixels to surface pixels.
    pub fn length(&self, logical: f32) -> f32 {
        logical * self.scale
    }

    /// Converts a continuous grid position to surface pixels.
    pub fn grid_to_surface(&self, position: Vec2) -> Vec2 {
        position * TILE_SIZE * self.scale
    }

    /// Surface rectangle covered by a cell.
    pub fn cell_rect(&self, cell: IVec2) -> Rect {
        Rect::new(self.grid_to_surface(cell.as_vec2()), Vec2::splat(self.length(TILE_SIZE)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_caps_scale() {
        let viewport = Viewport::fit(UVec2::new(10_000, 10_000), Vec2::new(462.0, 418.0));
        assert_eq!(viewport.scale(), MAX_SCALE);
        assert_eq!(viewport.size(), UVec2::new(924, 836));
    }

    #[test]
    fn test_tiny_container_keeps_one_pixel() {
        let viewport = Viewport::fit(UVec2::new(4, 4), Vec2::new(462.0, 418.0));
        assert_eq!(viewport.size(), UVec2::ONE);
    }
}
