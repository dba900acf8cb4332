//! Day/night colour model.
//!
//! Maps a time of day onto a smooth cosine curve that is 0.0 at local
//! midnight and 1.0 at local midday, then interpolates the configured HSV end
//! points along it. Stopwatch frames use a fixed mix factor instead, giving a
//! palette that does not react to the time of day.
//!
//! All functions are pure.

use crate::config::DayNightCurve;
use core::f32::consts::PI;
use libm::{cosf, floorf};
use palette::Srgb;

pub const SECONDS_PER_DAY: u32 = 86_400;

/// An HSV colour with every component expressed as a fraction.
///
/// `hue` is in turns and is not required to stay inside [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HsvColor {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl HsvColor {
    #[inline]
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Component-wise linear interpolation, `t = 0.0` yields `self`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            hue: lerp(self.hue, other.hue, t),
            saturation: lerp(self.saturation, other.saturation, t),
            value: lerp(self.value, other.value, t),
        }
    }

    #[inline]
    pub fn to_rgb(self) -> Srgb<u8> {
        from_hsv(self.hue, self.saturation, self.value)
    }
}

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    ((to - from) * t) + from
}

/// Six-sector HSV to RGB conversion.
///
/// The sector is `floor(h * 6) mod 6`. Channels are truncated toward zero and
/// then narrowed to their low byte, the same way the display driver narrows
/// pen components. Inputs inside [0, 1] therefore always yield channels in
/// [0, 255]; out-of-range values wrap instead of saturating.
pub fn from_hsv(h: f32, s: f32, v: f32) -> Srgb<u8> {
    let sector = floorf(h * 6.0);
    let f = h * 6.0 - sector;
    let v = v * 255.0;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Srgb::new(channel(r), channel(g), channel(b))
}

#[inline]
fn channel(value: f32) -> u8 {
    value as i32 as u8
}

/// Applies a display offset to an RTC hour, wrapping into 0..24.
#[inline]
pub fn local_hour(hour: u8, utc_offset_hours: i32) -> u8 {
    (i32::from(hour) + utc_offset_hours).rem_euclid(24) as u8
}

/// Position on the day/night curve for a number of seconds since midnight.
///
/// 0.0 at midnight, 0.5 at 06:00 and 18:00, 1.0 at midday.
pub fn percent_to_midday(seconds_through_day: u32) -> f32 {
    let percent_through_day = seconds_through_day as f32 / SECONDS_PER_DAY as f32;
    1.0 - ((cosf(percent_through_day * PI * 2.0) + 1.0) / 2.0)
}

/// Curve position for an RTC time, after applying the display offset.
pub fn day_night_mix(hour: u8, minute: u8, second: u8, utc_offset_hours: i32) -> f32 {
    let hour = u32::from(local_hour(hour, utc_offset_hours));
    let time_through_day = ((hour * 60 + u32::from(minute)) * 60) + u32::from(second);
    percent_to_midday(time_through_day)
}

/// Two-stop background: `start` at the display edges, `end` in the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gradient {
    pub start: HsvColor,
    pub end: HsvColor,
}

impl Gradient {
    /// Colour of column `x` in a gradient spanning `half_width` columns.
    pub fn at_column(&self, x: u32, half_width: u32) -> HsvColor {
        if half_width == 0 {
            return self.end;
        }
        self.start.lerp(self.end, x as f32 / half_width as f32)
    }
}

impl DayNightCurve {
    /// Midnight end point of the curve.
    pub fn midnight(&self) -> HsvColor {
        HsvColor::new(
            self.midnight_hue,
            self.midnight_saturation,
            self.midnight_value,
        )
    }

    /// Midday end point of the curve.
    pub fn midday(&self) -> HsvColor {
        HsvColor::new(self.midday_hue, self.midday_saturation, self.midday_value)
    }

    /// Interpolated HSV colour for a curve position.
    pub fn color_at(&self, percent_to_midday: f32) -> HsvColor {
        self.midnight().lerp(self.midday(), percent_to_midday)
    }

    /// Background gradient for a curve position.
    pub fn gradient_at(&self, percent_to_midday: f32) -> Gradient {
        let start = self.color_at(percent_to_midday);
        let end = HsvColor::new(start.hue + self.hue_offset, start.saturation, start.value);
        Gradient { start, end }
    }
}

/// Continuously varying wall-clock palette.
pub fn day_night_palette(
    curve: &DayNightCurve,
    hour: u8,
    minute: u8,
    second: u8,
    utc_offset_hours: i32,
) -> Gradient {
    curve.gradient_at(day_night_mix(hour, minute, second, utc_offset_hours))
}

/// Primary wall-clock colour for an RTC time.
pub fn day_night_color(
    curve: &DayNightCurve,
    hour: u8,
    minute: u8,
    second: u8,
    utc_offset_hours: i32,
) -> Srgb<u8> {
    curve
        .color_at(day_night_mix(hour, minute, second, utc_offset_hours))
        .to_rgb()
}

/// Fixed palette shared by every stopwatch mode.
///
/// `fixed_mix` is used as-is, so values outside [0, 1] extrapolate the curve.
pub fn stopwatch_palette(curve: &DayNightCurve, fixed_mix: f32) -> Gradient {
    curve.gradient_at(fixed_mix)
}
