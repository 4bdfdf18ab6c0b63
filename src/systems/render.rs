use tracing::trace;

use crate::constants::TILE_SIZE;
use crate::error::RenderError;
use crate::game::Game;
use crate::map::render::MapRenderer;
use crate::render::{palette, radius, Surface, Viewport};

/// Paints one full frame of `game`: background, maze, player, then ghosts.
///
/// Reads the simulation only, so it can run while paused.
pub fn render_game<S: Surface + ?Sized>(game: &Game, surface: &mut S, viewport: &Viewport) -> Result<(), RenderError> {
    if surface.size().min_element() == 0 {
        return Err(RenderError::EmptySurface);
    }

    surface.clear(palette::BACKGROUND)?;
    MapRenderer::render(game.maze(), game.collectibles(), surface, viewport)?;

    let player = viewport.grid_to_surface(game.player().agent.position());
    surface.fill_circle(player, viewport.length(TILE_SIZE * radius::PLAYER), palette::PLAYER)?;

    for ghost in game.ghosts() {
        let color = if ghost.is_frightened() {
            palette::GHOST_FRIGHTENED
        } else {
            palette::ghost(ghost.id)
        };
        let center = viewport.grid_to_surface(ghost.agent.position());
        surface.fill_circle(center, viewport.length(TILE_SIZE * radius::GHOST), color)?;
    }

    trace!(scale = viewport.scale(), "Frame rendered");
    Ok(())
}
