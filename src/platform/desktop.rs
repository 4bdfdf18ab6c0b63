//! SDL2 desktop backend.

use std::time::Duration;

use glam::{UVec2, Vec2};
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::keyboard::Keycode;
use sdl2::pixels;
use sdl2::render::{Canvas, RenderTarget};

use crate::error::RenderError;
use crate::input::Key;
use crate::render::{Color, Rect, Surface};

/// A [`Surface`] drawing straight onto an SDL canvas.
pub struct CanvasSurface<'a, T: RenderTarget> {
    canvas: &'a mut Canvas<T>,
}

impl<'a, T: RenderTarget> CanvasSurface<'a, T> {
    pub fn new(canvas: &'a mut Canvas<T>) -> Self {
        Self { canvas }
    }
}

impl From<Color> for pixels::Color {
    fn from(color: Color) -> Self {
        pixels::Color::RGB(color.r, color.g, color.b)
    }
}

fn sdl_rect(rect: Rect) -> Option<sdl2::rect::Rect> {
    let width = rect.size.x.round();
    let height = rect.size.y.round();
    if width < 1.0 || height < 1.0 {
        return None;
    }
    Some(sdl2::rect::Rect::new(
        rect.origin.x.round() as i32,
        rect.origin.y.round() as i32,
        width as u32,
        height as u32,
    ))
}

impl<T: RenderTarget> Surface for CanvasSurface<'_, T> {
    fn size(&self) -> UVec2 {
        self.canvas
            .output_size()
            .map(|(width, height)| UVec2::new(width, height))
            .unwrap_or(UVec2::ZERO)
    }

    fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        let Some(rect) = sdl_rect(rect) else {
            return Ok(());
        };
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(rect).map_err(RenderError::DrawFailed)
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        let Some(rect) = sdl_rect(rect) else {
            return Ok(());
        };
        self.canvas.set_draw_color(color);
        self.canvas.draw_rect(rect).map_err(RenderError::DrawFailed)
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), RenderError> {
        let radius = radius.round() as i16;
        if radius <= 0 {
            return Ok(());
        }
        self.canvas
            .filled_circle(center.x.round() as i16, center.y.round() as i16, radius, pixels::Color::from(color))
            .map_err(RenderError::DrawFailed)
    }
}

/// Maps an SDL keycode onto the keys the game understands.
pub fn key_from_keycode(keycode: Keycode) -> Option<Key> {
    Some(match keycode {
        Keycode::Up => Key::ArrowUp,
        Keycode::Down => Key::ArrowDown,
        Keycode::Left => Key::ArrowLeft,
        Keycode::Right => Key::ArrowRight,
        Keycode::W => Key::W,
        Keycode::A => Key::A,
        Keycode::S => Key::S,
        Keycode::D => Key::D,
        Keycode::P => Key::P,
        Keycode::R => Key::R,
        Keycode::Space => Key::Space,
        Keycode::Escape => Key::Escape,
        _ => return None,
    })
}

/// Waits out the rest of a frame, spinning only while the window has focus.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}
