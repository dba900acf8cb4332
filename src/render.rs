//! Periodic render pass.
//!
//! [`RenderScheduler::run_pass`] is meant to be called from a fixed-period
//! timer (100 ms by default). It holds the state lock only long enough to
//! advance the stopwatch and copy a [`Snapshot`](crate::state::Snapshot);
//! all drawing happens after the lock is released and without allocation.

use crate::color::{day_night_palette, local_hour, stopwatch_palette, Gradient};
use crate::config::ClockConfig;
use crate::display::{centered_x, fill_gradient, outline_text, pen, Surface};
use crate::state::SharedClock;
use crate::time::{DateTime, WallClock};
use crate::types::{Elapsed, Mode};
use crate::{BLACK, WHITE};
use core::fmt::Write;
use embassy_sync::blocking_mutex::raw::RawMutex;

/// Longest string a frame renders: a ten digit hour count plus `:MM:SS:T`.
pub const TEXT_CAPACITY: usize = 24;

pub type FrameText = heapless::String<TEXT_CAPACITY>;

/// What a render pass put on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frame {
    /// A stopwatch view showing `value`.
    Stopwatch { mode: Mode, value: Elapsed },
    /// The wall clock at local `hour:minute:second`.
    WallClock { hour: u8, minute: u8, second: u8 },
    /// Wall clock second already on screen; nothing redrawn.
    Unchanged,
}

/// Draws the current state onto a [`Surface`] once per tick.
///
/// # Type Parameters
/// * `'a` - Lifetime of the shared state reference
/// * `R` - Raw mutex guarding the shared state
/// * `S` - Drawing surface implementation type
/// * `W` - Real-time clock implementation type
pub struct RenderScheduler<'a, R: RawMutex, S: Surface, W: WallClock> {
    clock: &'a SharedClock<R>,
    surface: S,
    wall_clock: W,
    config: ClockConfig,
    outline: S::Pen,
    fill: S::Pen,
}

impl<'a, R: RawMutex, S: Surface, W: WallClock> RenderScheduler<'a, R, S, W> {
    pub fn new(clock: &'a SharedClock<R>, mut surface: S, wall_clock: W, config: ClockConfig) -> Self {
        let outline = pen(&mut surface, BLACK);
        let fill = pen(&mut surface, WHITE);

        Self {
            clock,
            surface,
            wall_clock,
            config,
            outline,
            fill,
        }
    }

    /// Runs one tick: snapshot, draw if needed, present.
    ///
    /// The frame is presented on every pass, including unchanged wall-clock
    /// seconds, so brightness changes take effect immediately.
    pub fn run_pass(&mut self) -> Frame {
        let now = self.wall_clock.now();
        let (snapshot, fresh_second) = self.clock.lock(|state| {
            let snapshot = state.advance();
            let fresh = snapshot.mode == Mode::Clock && state.claim_second(now.second);
            (snapshot, fresh)
        });

        let frame = match snapshot.mode {
            Mode::Running | Mode::Stopped => self.draw_stopwatch(snapshot.mode, snapshot.elapsed),
            Mode::Recall => self.draw_stopwatch(snapshot.mode, snapshot.stored_elapsed),
            Mode::Clock if fresh_second => self.draw_wall_clock(now, snapshot.utc_offset_hours),
            Mode::Clock => {
                debug!("second {} already drawn", now.second);
                Frame::Unchanged
            }
        };

        self.surface.update();
        frame
    }

    /// Stopwatch views always use the fixed palette, never the time of day.
    fn draw_stopwatch(&mut self, mode: Mode, value: Elapsed) -> Frame {
        let gradient = stopwatch_palette(&self.config.curve, self.config.stopwatch_mix);

        let mut text = FrameText::new();
        // Capacity covers any u32 hour count.
        let _ = write!(text, "{}", value);

        self.draw(&gradient, &text);
        Frame::Stopwatch { mode, value }
    }

    fn draw_wall_clock(&mut self, now: DateTime, utc_offset_hours: i32) -> Frame {
        let hour = local_hour(now.hour, utc_offset_hours);
        let gradient = day_night_palette(
            &self.config.curve,
            now.hour,
            now.minute,
            now.second,
            utc_offset_hours,
        );

        let mut text = FrameText::new();
        let _ = write!(text, "{:02}:{:02}:{:02}", hour, now.minute, now.second);

        self.draw(&gradient, &text);
        Frame::WallClock {
            hour,
            minute: now.minute,
            second: now.second,
        }
    }

    fn draw(&mut self, gradient: &Gradient, text: &str) {
        fill_gradient(&mut self.surface, gradient);

        let scale = self.config.text_scale;
        let text_width = self.surface.measure_text(text, scale);
        let x = centered_x(self.surface.width(), text_width);
        outline_text(
            &mut self.surface,
            text,
            x,
            self.config.text_top,
            scale,
            self.outline,
            self.fill,
        );
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Returns the surface and wall clock.
    pub fn into_parts(self) -> (S, W) {
        (self.surface, self.wall_clock)
    }
}
