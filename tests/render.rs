use glam::{IVec2, UVec2, Vec2};
use pacbox::config::SimConfig;
use pacbox::constants::TILE_SIZE;
use pacbox::game::Game;
use pacbox::render::viewport::{CHROME, MAX_SCALE};
use pacbox::render::{palette, Color, Framebuffer, Rect, Surface, Viewport};
use pacbox::systems::render::render_game;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

fn board() -> Vec2 {
    Vec2::new(21.0, 19.0) * TILE_SIZE
}

#[test]
fn test_color_hex() {
    assert_eq!(Color::hex(0x0b1220), Color::rgb(0x0b, 0x12, 0x20));
    assert_eq!(palette::ghost(5), palette::GHOSTS[1]);
}

#[test]
fn test_viewport_fit_subtracts_chrome() {
    let viewport = Viewport::fit(UVec2::new(462, 418) + CHROME, board());
    assert_that(&viewport.scale()).is_equal_to(1.0);
    assert_that(&viewport.size()).is_equal_to(UVec2::new(462, 418));

    let limited_by_height = Viewport::fit(UVec2::new(2000, 209 + CHROME.y), board());
    assert_that(&limited_by_height.scale()).is_equal_to(0.5);
}

#[test]
fn test_viewport_scale_is_capped() {
    let viewport = Viewport::fit(UVec2::new(8000, 8000), board());
    assert_that(&viewport.scale()).is_equal_to(MAX_SCALE);
}

#[test]
fn test_viewport_cell_rect() {
    let viewport = Viewport::new(board(), 2.0);
    let rect = viewport.cell_rect(IVec2::new(1, 2));
    assert_eq!(rect, Rect::new(Vec2::new(44.0, 88.0), Vec2::splat(44.0)));
}

#[test]
fn test_framebuffer_circle() {
    let mut framebuffer = Framebuffer::new(UVec2::new(20, 20)).unwrap();
    let yellow = Color::rgb(255, 255, 0);
    framebuffer.fill_circle(Vec2::new(10.0, 10.0), 4.0, yellow).unwrap();

    assert_that(&framebuffer.pixel(10, 10)).is_equal_to(Some(yellow));
    assert_that(&framebuffer.pixel(0, 0)).is_equal_to(Some(Color::rgb(0, 0, 0)));
    assert_that(&framebuffer.pixel(20, 0)).is_none();
}

#[test]
fn test_framebuffer_stroke_leaves_interior() {
    let mut framebuffer = Framebuffer::new(UVec2::new(10, 10)).unwrap();
    let white = Color::rgb(255, 255, 255);
    framebuffer
        .stroke_rect(Rect::new(Vec2::ZERO, Vec2::splat(10.0)), white)
        .unwrap();

    assert_that(&framebuffer.pixel(0, 0)).is_equal_to(Some(white));
    assert_that(&framebuffer.pixel(9, 5)).is_equal_to(Some(white));
    assert_that(&framebuffer.pixel(5, 5)).is_equal_to(Some(Color::rgb(0, 0, 0)));
}

#[test]
fn test_render_reference_frame() {
    let game = Game::with_reference_maze(SimConfig::default()).unwrap();
    let mut framebuffer = Framebuffer::new(UVec2::new(462, 418)).unwrap();
    let viewport = Viewport::new(board(), 1.0);

    render_game(&game, &mut framebuffer, &viewport).unwrap();

    // Wall interior, power pellet at (1, 3), empty cell (3, 3), player on (10, 11)
    assert_that(&framebuffer.pixel(5, 5)).is_equal_to(Some(palette::WALL_FILL));
    assert_that(&framebuffer.pixel(33, 77)).is_equal_to(Some(palette::POWER_PELLET));
    assert_that(&framebuffer.pixel(77, 77)).is_equal_to(Some(palette::BACKGROUND));
    assert_that(&framebuffer.pixel(231, 253)).is_equal_to(Some(palette::PLAYER));
}

#[test]
fn test_frightened_ghosts_change_color() {
    let mut game = Game::with_reference_maze(SimConfig::default()).unwrap();
    let ghost = game.ghosts()[0].agent.position() * TILE_SIZE;
    for ghost in game.ghosts_mut() {
        ghost.frighten(1.0);
    }
    let mut framebuffer = Framebuffer::new(UVec2::new(462, 418)).unwrap();

    render_game(&game, &mut framebuffer, &Viewport::new(board(), 1.0)).unwrap();

    assert_that(&framebuffer.pixel(ghost.x as u32, ghost.y as u32)).is_equal_to(Some(palette::GHOST_FRIGHTENED));
}
