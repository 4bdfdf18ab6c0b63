//! Drawing primitives shared by every presentation backend.
//!
//! The simulation never draws. Frames are painted onto anything implementing
//! [`Surface`], sized and scaled through a [`Viewport`].

use glam::{UVec2, Vec2};

use crate::error::RenderError;

pub mod framebuffer;
pub mod viewport;

pub use framebuffer::Framebuffer;
pub use viewport::Viewport;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn hex(value: u32) -> Self {
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

/// An axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// The rectangle shrunk by `amount` on every side.
    pub fn inset(self, amount: f32) -> Self {
        Self {
            origin: self.origin + Vec2::splat(amount),
            size: (self.size - Vec2::splat(amount * 2.0)).max(Vec2::ZERO),
        }
    }
}

/// Something frames can be painted onto.
pub trait Surface {
    /// Size of the drawable area, in pixels.
    fn size(&self) -> UVec2;

    fn clear(&mut self, color: Color) -> Result<(), RenderError>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;

    /// Draws a one pixel outline just inside `rect`.
    fn stroke_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), RenderError>;
}

pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color::hex(0x0b1220);
    pub const WALL_FILL: Color = Color::hex(0x1f2937);
    pub const WALL_STROKE: Color = Color::hex(0x374151);
    pub const PELLET: Color = Color::hex(0x9ca3af);
    pub const POWER_PELLET: Color = Color::hex(0xfde047);
    pub const PLAYER: Color = Color::hex(0xfacc15);
    pub const GHOST_FRIGHTENED: Color = Color::hex(0x60a5fa);

    /// Ghost body colors, cycled by ghost id.
    pub const GHOSTS: [Color; 4] = [
        Color::hex(0xef4444),
        Color::hex(0x22d3ee),
        Color::hex(0xf472b6),
        Color::hex(0xf59e0b),
    ];

    /// Body color of the ghost with the given id.
    pub const fn ghost(id: usize) -> Color {
        GHOSTS[id % GHOSTS.len()]
    }
}

/// Radii, in logical pixels or fractions of a tile.
pub mod radius {
    pub const PELLET: f32 = 2.5;
    pub const POWER_PELLET: f32 = 4.0;
    /// Fraction of a tile
    pub const PLAYER: f32 = 0.38;
    /// Fraction of a tile
    pub const GHOST: f32 = 0.36;
}
