//! Map rendering functionality.

use glam::Vec2;

use crate::constants::{MapTile, TILE_SIZE};
use crate::error::RenderError;
use crate::map::maze::Maze;
use crate::render::{palette, radius, Surface, Viewport};
use crate::systems::item::Collectibles;
use crate::systems::movement::cell_center;

/// Handles rendering operations for the map.
pub struct MapRenderer;

impl MapRenderer {
    /// Draws the walls, then every collectible still on the board.
    pub fn render<S: Surface + ?Sized>(
        maze: &Maze,
        collectibles: &Collectibles,
        surface: &mut S,
        viewport: &Viewport,
    ) -> Result<(), RenderError> {
        for (cell, tile) in maze.cells() {
            if tile == MapTile::Wall {
                let rect = viewport.cell_rect(cell);
                surface.fill_rect(rect, palette::WALL_FILL)?;
                surface.stroke_rect(rect.inset(viewport.length(0.5)), palette::WALL_STROKE)?;
                continue;
            }

            if !collectibles.contains(cell) {
                continue;
            }
            let (color, size) = if maze.is_power_cell(cell) {
                (palette::POWER_PELLET, radius::POWER_PELLET)
            } else {
                (palette::PELLET, radius::PELLET)
            };
            let center = viewport.grid_to_surface(cell_center(cell));
            surface.fill_circle(center, viewport.length(size), color)?;
        }

        Ok(())
    }

    /// Logical size of the maze, in pixels.
    pub fn board_size(maze: &Maze) -> Vec2 {
        maze.size().as_vec2() * TILE_SIZE
    }
}
