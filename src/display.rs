//! Drawing surface abstraction and the frame primitives built on it.

use crate::color::{Gradient, from_hsv};
use palette::Srgb;

/// Trait for abstracting the pixel matrix and its text renderer.
///
/// Mirrors a pen-based graphics API: pens are created from RGB components,
/// selected with [`Surface::set_pen`], and every drawing call uses the
/// selected pen. Nothing is visible until [`Surface::update`] is called.
pub trait Surface {
    /// Handle for a created pen.
    type Pen: Copy;

    /// Fixed matrix width in pixels.
    fn width(&self) -> u32;

    /// Fixed matrix height in pixels.
    fn height(&self) -> u32;

    fn create_pen(&mut self, red: u8, green: u8, blue: u8) -> Self::Pen;

    fn set_pen(&mut self, pen: Self::Pen);

    fn pixel(&mut self, x: i32, y: i32);

    /// Draws `text` with its top-left corner at (`x`, `y`).
    ///
    /// `wrap` is the wrap width in pixels, negative to disable wrapping.
    fn text(&mut self, text: &str, x: i32, y: i32, wrap: i32, scale: f32);

    /// Rendered width of `text` in pixels.
    fn measure_text(&self, text: &str, scale: f32) -> i32;

    /// Flushes the drawn frame to the display.
    fn update(&mut self);
}

/// Creates a pen from an 8-bit colour.
#[inline]
pub fn pen<S: Surface>(surface: &mut S, color: Srgb<u8>) -> S::Pen {
    surface.create_pen(color.red, color.green, color.blue)
}

/// Fills the whole surface with a gradient mirrored around the centre column.
///
/// The edges take `gradient.start`, the centre column takes `gradient.end`.
pub fn fill_gradient<S: Surface>(surface: &mut S, gradient: &Gradient) {
    let width = surface.width();
    let height = surface.height() as i32;
    let half_width = width / 2;

    for x in 0..half_width {
        let hsv = gradient.at_column(x, half_width);
        let column_pen = pen(surface, from_hsv(hsv.hue, hsv.saturation, hsv.value));
        surface.set_pen(column_pen);

        let mirrored = (width - x - 1) as i32;
        for y in 0..height {
            surface.pixel(x as i32, y);
            surface.pixel(mirrored, y);
        }
    }

    let centre_pen = pen(surface, gradient.end.to_rgb());
    surface.set_pen(centre_pen);
    for y in 0..height {
        surface.pixel(half_width as i32, y);
    }
}

/// The eight neighbour offsets used for the text halo.
pub const OUTLINE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Draws `text` with a one pixel outline.
///
/// The string is drawn at each of the eight neighbouring offsets with
/// `outline`, then once at (`x`, `y`) with `fill`.
pub fn outline_text<S: Surface>(
    surface: &mut S,
    text: &str,
    x: i32,
    y: i32,
    scale: f32,
    outline: S::Pen,
    fill: S::Pen,
) {
    surface.set_pen(outline);
    for (dx, dy) in OUTLINE_OFFSETS {
        surface.text(text, x + dx, y + dy, -1, scale);
    }

    surface.set_pen(fill);
    surface.text(text, x, y, -1, scale);
}

/// Left edge that horizontally centres text of `text_width` pixels.
///
/// `width / 2 - text_width / 2 + 1`, truncated toward zero.
#[inline]
pub fn centered_x(width: u32, text_width: i32) -> i32 {
    (width as f32 / 2.0 - text_width as f32 / 2.0 + 1.0) as i32
}
