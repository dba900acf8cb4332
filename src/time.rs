//! Time abstraction traits for platform-agnostic timing.
//!
//! Two kinds of time are involved: a monotonic millisecond source used for
//! button debouncing, and the real-time clock that the wall-clock view reads.

/// Trait for abstracting monotonic time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Calendar reading of the real-time clock, always in UTC once synced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    /// 0 = Monday.
    pub weekday: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTime {
    /// Creates a reading at a time of day on an unspecified date.
    pub const fn from_hms(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year: 2000,
            month: 1,
            day: 1,
            weekday: 5,
            hour,
            minute,
            second,
        }
    }
}

/// Read-only view of the real-time clock.
///
/// Only the external time sync step ever writes to the underlying clock.
pub trait WallClock {
    fn now(&self) -> DateTime;
}

impl<W: WallClock + ?Sized> WallClock for &W {
    fn now(&self) -> DateTime {
        (**self).now()
    }
}
