//! Host stand-ins for the appliance peripherals.

use chrono::{Datelike, Timelike, Utc};
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use std::time::{Duration, Instant};
use stopwatch_clock::{
    Button, DateTime, InputSource, LinkStatus, TimeDuration, TimeInstant, TimeSource, TimeSync,
    WallClock,
};

/// Real-time clock backed by the host's UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> DateTime {
        let now = Utc::now();
        DateTime {
            year: now.year().clamp(0, u16::MAX as i32) as u16,
            month: now.month() as u8,
            day: now.day() as u8,
            weekday: now.weekday().num_days_from_monday() as u8,
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
        }
    }
}

/// Monotonic duration wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HostDuration(Duration);

impl TimeDuration for HostDuration {
    const ZERO: Self = HostDuration(Duration::ZERO);

    fn as_millis(&self) -> u64 {
        self.0.as_millis() as u64
    }

    fn from_millis(millis: u64) -> Self {
        HostDuration(Duration::from_millis(millis))
    }
}

/// Monotonic instant wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HostInstant(Instant);

impl TimeInstant for HostInstant {
    type Duration = HostDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        HostDuration(self.0.saturating_duration_since(earlier.0))
    }
}

/// Time source wrapper around `std::time::Instant`
#[derive(Debug, Clone, Copy, Default)]
pub struct HostTimer;

impl TimeSource<HostInstant> for HostTimer {
    fn now(&self) -> HostInstant {
        HostInstant(Instant::now())
    }
}

/// Blocking delay that sleeps the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepDelay;

impl DelayNs for SleepDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

/// A board without buttons; commands arrive through the console instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoButtons {
    brightness: f32,
}

impl NoButtons {
    pub fn brightness(&self) -> f32 {
        self.brightness
    }
}

impl InputSource for NoButtons {
    fn is_pressed(&self, _button: Button) -> bool {
        false
    }

    fn adjust_brightness(&mut self, delta: f32) {
        self.brightness = (self.brightness + delta).clamp(0.0, 1.0);
    }

    fn set_brightness(&mut self, level: f32) {
        self.brightness = level.clamp(0.0, 1.0);
        log::debug!("brightness {:.2}", self.brightness);
    }
}

/// The host clock is already synchronised, so there is nothing to connect to.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostSync;

impl TimeSync for HostSync {
    type Error = Infallible;

    fn has_credentials(&self) -> bool {
        false
    }

    fn connect(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn status(&mut self) -> LinkStatus {
        LinkStatus::Connected
    }

    fn set_time(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn disconnect(&mut self) {}
}
