use glam::{UVec2, Vec2};

use crate::error::RenderError;
use crate::render::{Color, Rect, Surface};

/// A software RGB surface, used headless and in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    size: UVec2,
    pixels: Vec<Color>,
}

impl Framebuffer {
    pub fn new(size: UVec2) -> Result<Self, RenderError> {
        if size.x == 0 || size.y == 0 {
            return Err(RenderError::EmptySurface);
        }
        Ok(Self {
            size,
            pixels: vec![Color::rgb(0, 0, 0); (size.x * size.y) as usize],
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size.x || y >= self.size.y {
            return None;
        }
        Some(self.pixels[(y * self.size.x + x) as usize])
    }

    fn put(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.size.x as i64 || y >= self.size.y as i64 {
            return;
        }
        let index = y as usize * self.size.x as usize + x as usize;
        self.pixels[index] = color;
    }

    /// Pixel span covered by `[start, start + length)`, by pixel centers.
    fn span(start: f32, length: f32) -> (i64, i64) {
        (start.round() as i64, (start + length).round() as i64)
    }
}

impl Surface for Framebuffer {
    fn size(&self) -> UVec2 {
        self.size
    }

    fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        self.pixels.fill(color);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        let (x0, x1) = Self::span(rect.origin.x, rect.size.x);
        let (y0, y1) = Self::span(rect.origin.y, rect.size.y);
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, color);
            }
        }
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        let (x0, x1) = Self::span(rect.origin.x, rect.size.x);
        let (y0, y1) = Self::span(rect.origin.y, rect.size.y);
        if x1 <= x0 || y1 <= y0 {
            return Ok(());
        }
        for x in x0..x1 {
            self.put(x, y0, color);
            self.put(x, y1 - 1, color);
        }
        for y in y0..y1 {
            self.put(x0, y, color);
            self.put(x1 - 1, y, color);
        }
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), RenderError> {
        if radius <= 0.0 {
            return Ok(());
        }
        let radius_squared = radius * radius;
        let (x0, x1) = Self::span(center.x - radius, radius * 2.0);
        let (y0, y1) = Self::span(center.y - radius, radius * 2.0);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let offset = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                if offset.length_squared() <= radius_squared {
                    self.put(x, y, color);
                }
            }
        }
        Ok(())
    }
}
