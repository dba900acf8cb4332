//! Core value types shared by the state machine, input and render paths.

use core::fmt;

/// Which view the display is showing.
///
/// Exactly one mode is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Wall clock with the day/night background.
    #[default]
    Clock,
    /// Live stopwatch. Advances only while the state's `running` flag is set.
    Running,
    /// Frozen stopwatch value captured by the last stop.
    Stopped,
    /// The stored lap value.
    Recall,
}

impl Mode {
    /// True for the three views that use the fixed stopwatch palette.
    pub fn is_stopwatch(&self) -> bool {
        !matches!(self, Mode::Clock)
    }
}

/// Stopwatch accumulator with tenth-of-a-second resolution.
///
/// `tenths` stays in 0..=9, `seconds` and `minutes` in 0..=59; hours are
/// unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Elapsed {
    pub hours: u32,
    pub minutes: u8,
    pub seconds: u8,
    pub tenths: u8,
}

impl Elapsed {
    pub const ZERO: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
        tenths: 0,
    };

    pub const fn new(hours: u32, minutes: u8, seconds: u8, tenths: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            tenths,
        }
    }

    /// Advances by one tenth, carrying each field at most once.
    pub fn tick(&mut self) {
        self.tenths += 1;
        if self.tenths < 10 {
            return;
        }
        self.tenths = 0;

        self.seconds += 1;
        if self.seconds < 60 {
            return;
        }
        self.seconds = 0;

        self.minutes += 1;
        if self.minutes < 60 {
            return;
        }
        self.minutes = 0;

        self.hours = self.hours.saturating_add(1);
    }

    /// Total length in tenths of a second.
    pub fn total_tenths(&self) -> u64 {
        let seconds = (u64::from(self.hours) * 60 + u64::from(self.minutes)) * 60
            + u64::from(self.seconds);
        seconds * 10 + u64::from(self.tenths)
    }
}

/// Formats as `HH:MM:SS:T`.
impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:01}",
            self.hours, self.minutes, self.seconds, self.tenths
        )
    }
}

/// Physical buttons on the appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    BrightnessUp,
    BrightnessDown,
    /// Start.
    A,
    /// Stop and lap.
    B,
    /// Recall.
    C,
    /// Clock view.
    D,
    /// UTC offset +1, edge triggered.
    OffsetUp,
    /// UTC offset -1, edge triggered.
    OffsetDown,
}
