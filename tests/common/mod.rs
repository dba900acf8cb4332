//! Shared test infrastructure for stopwatch-clock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use embedded_hal::delay::DelayNs;
use palette::Srgb;
use std::cell::Cell;
use stopwatch_clock::{
    Button, DateTime, InputSource, LinkStatus, Surface, TimeDuration, TimeInstant, TimeSource,
    TimeSync, WallClock,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Wall Clocks
// ============================================================================

/// Settable real-time clock, shared with the renderer by reference
pub struct MockWallClock {
    now: Cell<DateTime>,
}

impl MockWallClock {
    pub fn at(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            now: Cell::new(DateTime::from_hms(hour, minute, second)),
        }
    }

    pub fn set(&self, hour: u8, minute: u8, second: u8) {
        self.now.set(DateTime::from_hms(hour, minute, second));
    }
}

impl WallClock for MockWallClock {
    fn now(&self) -> DateTime {
        self.now.get()
    }
}

/// Frozen real-time clock that can move between threads
#[derive(Debug, Clone, Copy)]
pub struct FixedWallClock(pub DateTime);

impl WallClock for FixedWallClock {
    fn now(&self) -> DateTime {
        self.0
    }
}

// ============================================================================
// Mock Surface
// ============================================================================

/// Pixel advance of the mock font
pub const GLYPH_WIDTH: i32 = 5;

/// A recorded `text` call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnText {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub pen: Srgb<u8>,
}

/// Mock surface that keeps a framebuffer and records text calls
pub struct MockSurface {
    width: u32,
    height: u32,
    pen: Srgb<u8>,
    pixels: Vec<Srgb<u8>>,
    texts: Vec<DrawnText>,
    updates: usize,
}

impl MockSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pen: Srgb::new(0, 0, 0),
            pixels: vec![Srgb::new(0, 0, 0); (width * height) as usize],
            texts: Vec::new(),
            updates: 0,
        }
    }

    /// Galactic Unicorn sized matrix
    pub fn galactic() -> Self {
        Self::new(53, 11)
    }

    pub fn pixel_at(&self, x: u32, y: u32) -> Srgb<u8> {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn texts(&self) -> &[DrawnText] {
        &self.texts
    }

    /// The last string drawn in the fill pen
    pub fn last_fill_text(&self) -> Option<&DrawnText> {
        self.texts
            .iter()
            .rev()
            .find(|drawn| drawn.pen == Srgb::new(255, 255, 255))
    }

    pub fn updates(&self) -> usize {
        self.updates
    }

    pub fn clear_log(&mut self) {
        self.texts.clear();
    }
}

impl Surface for MockSurface {
    type Pen = Srgb<u8>;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn create_pen(&mut self, red: u8, green: u8, blue: u8) -> Self::Pen {
        Srgb::new(red, green, blue)
    }

    fn set_pen(&mut self, pen: Self::Pen) {
        self.pen = pen;
    }

    fn pixel(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let index = (y as u32 * self.width + x as u32) as usize;
        self.pixels[index] = self.pen;
    }

    fn text(&mut self, text: &str, x: i32, y: i32, _wrap: i32, _scale: f32) {
        self.texts.push(DrawnText {
            text: text.to_string(),
            x,
            y,
            pen: self.pen,
        });
    }

    fn measure_text(&self, text: &str, scale: f32) -> i32 {
        (text.chars().count() as f32 * GLYPH_WIDTH as f32 * scale) as i32
    }

    fn update(&mut self) {
        self.updates += 1;
    }
}

// ============================================================================
// Mock Inputs
// ============================================================================

/// Buttons held down and the brightness they produced
pub struct MockInput {
    held: Vec<Button>,
    brightness: f32,
}

impl MockInput {
    pub fn new() -> Self {
        Self {
            held: Vec::new(),
            brightness: 0.0,
        }
    }

    pub fn press(&mut self, button: Button) {
        if !self.held.contains(&button) {
            self.held.push(button);
        }
    }

    pub fn release(&mut self, button: Button) {
        self.held.retain(|held| *held != button);
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }
}

impl InputSource for MockInput {
    fn is_pressed(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    fn adjust_brightness(&mut self, delta: f32) {
        self.brightness = (self.brightness + delta).clamp(0.0, 1.0);
    }

    fn set_brightness(&mut self, level: f32) {
        self.brightness = level.clamp(0.0, 1.0);
    }
}

// ============================================================================
// Mock Time Sync
// ============================================================================

/// Network link that comes up after a number of status polls
pub struct MockSync {
    pub credentials: bool,
    pub polls_until_up: u32,
    pub fail_request: bool,
    pub polls: u32,
    pub time_set: bool,
    pub disconnected: bool,
}

impl MockSync {
    pub fn without_credentials() -> Self {
        Self::connecting_for(0, false)
    }

    pub fn connecting_for(polls_until_up: u32, credentials: bool) -> Self {
        Self {
            credentials,
            polls_until_up,
            fail_request: false,
            polls: 0,
            time_set: false,
            disconnected: false,
        }
    }
}

impl TimeSync for MockSync {
    type Error = ();

    fn has_credentials(&self) -> bool {
        self.credentials
    }

    fn connect(&mut self) -> Result<(), ()> {
        Ok(())
    }

    fn status(&mut self) -> LinkStatus {
        self.polls += 1;
        if self.polls > self.polls_until_up {
            LinkStatus::Connected
        } else {
            LinkStatus::Connecting
        }
    }

    fn set_time(&mut self) -> Result<(), ()> {
        if self.fail_request {
            return Err(());
        }
        self.time_set = true;
        Ok(())
    }

    fn disconnect(&mut self) {
        self.disconnected = true;
    }
}

/// Delay that returns immediately and counts requested milliseconds
pub struct CountingDelay {
    pub total_ms: u64,
}

impl CountingDelay {
    pub fn new() -> Self {
        Self { total_ms: 0 }
    }
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ms += u64::from(ns) / 1_000_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ms += u64::from(ms);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two 8-bit colors allowing an off-by-one per channel
pub fn rgb_close(a: Srgb<u8>, b: Srgb<u8>) -> bool {
    a.red.abs_diff(b.red) <= 1 && a.green.abs_diff(b.green) <= 1 && a.blue.abs_diff(b.blue) <= 1
}
