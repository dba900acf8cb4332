//! ANSI true-colour rendering of the LED matrix.
//!
//! Two matrix rows share one terminal line using the upper half block: the
//! foreground colour paints the top pixel, the background the bottom one.

use crate::font::{lit_pixels, ADVANCE};
use std::io::{self, Write};
use stopwatch_clock::{Srgb, Surface};

/// Galactic Unicorn dimensions.
pub const WIDTH: u32 = 53;
pub const HEIGHT: u32 = 11;

/// Terminal lines the matrix occupies, plus one blank separator.
pub const LINES: u16 = (HEIGHT as u16).div_ceil(2) + 1;

/// Framebuffer drawn to the top of the terminal on every update.
pub struct TerminalSurface<W: Write> {
    out: W,
    pen: Srgb<u8>,
    pixels: Vec<Srgb<u8>>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            pen: Srgb::new(0, 0, 0),
            pixels: vec![Srgb::new(0, 0, 0); (WIDTH * HEIGHT) as usize],
        }
    }

    fn at(&self, x: u32, y: u32) -> Srgb<u8> {
        if y < HEIGHT {
            self.pixels[(y * WIDTH + x) as usize]
        } else {
            Srgb::new(0, 0, 0)
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let mut frame = String::with_capacity((WIDTH as usize) * 40 * LINES as usize);
        // Save cursor, jump home.
        frame.push_str("\x1b7\x1b[H");
        for line in 0..HEIGHT.div_ceil(2) {
            for x in 0..WIDTH {
                let top = self.at(x, line * 2);
                let bottom = self.at(x, line * 2 + 1);
                frame.push_str(&format!(
                    "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m\u{2580}",
                    top.red, top.green, top.blue, bottom.red, bottom.green, bottom.blue
                ));
            }
            frame.push_str("\x1b[0m\r\n");
        }
        frame.push_str("\x1b8");

        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    type Pen = Srgb<u8>;

    fn width(&self) -> u32 {
        WIDTH
    }

    fn height(&self) -> u32 {
        HEIGHT
    }

    fn create_pen(&mut self, red: u8, green: u8, blue: u8) -> Self::Pen {
        Srgb::new(red, green, blue)
    }

    fn set_pen(&mut self, pen: Self::Pen) {
        self.pen = pen;
    }

    fn pixel(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return;
        }
        let index = (y as u32 * WIDTH + x as u32) as usize;
        self.pixels[index] = self.pen;
    }

    fn text(&mut self, text: &str, x: i32, y: i32, _wrap: i32, _scale: f32) {
        for (i, c) in text.chars().enumerate() {
            let left = x + i as i32 * ADVANCE;
            for (dx, dy) in lit_pixels(c) {
                self.pixel(left + dx, y + dy);
            }
        }
    }

    fn measure_text(&self, text: &str, scale: f32) -> i32 {
        (text.chars().count() as f32 * ADVANCE as f32 * scale) as i32
    }

    fn update(&mut self) {
        if let Err(err) = self.present() {
            log::warn!("frame dropped: {}", err);
        }
    }
}
