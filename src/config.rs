//! Tunable constants for rendering, input and startup time sync.

/// Hue/saturation/value end points of the day/night background curve.
///
/// Hues are expressed in turns (1.0 = 360°) and may exceed 1.0; the HSV
/// conversion wraps them by sector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DayNightCurve {
    pub midday_hue: f32,
    pub midnight_hue: f32,
    /// Added to the interpolated hue to get the gradient's second stop.
    pub hue_offset: f32,
    pub midday_saturation: f32,
    pub midnight_saturation: f32,
    pub midday_value: f32,
    pub midnight_value: f32,
}

impl DayNightCurve {
    pub const DEFAULT: Self = Self {
        midday_hue: 1.1,
        midnight_hue: 0.8,
        hue_offset: -0.1,
        midday_saturation: 1.0,
        midnight_saturation: 1.0,
        midday_value: 0.8,
        midnight_value: 0.3,
    };
}

impl Default for DayNightCurve {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Bounded retry window for the startup network time sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SyncConfig {
    /// Number of link status polls before giving up.
    pub max_polls: u32,
    /// Delay between polls.
    pub poll_interval_ms: u32,
}

impl SyncConfig {
    pub const DEFAULT: Self = Self {
        max_polls: 100,
        poll_interval_ms: 200,
    };
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Runtime configuration for the clock appliance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    /// Render scheduler period. One stopwatch tenth elapses per tick.
    pub tick_period_ms: u32,
    /// Brightness delta applied per poll while a brightness button is held.
    pub brightness_step: f32,
    /// Brightness set once at bootstrap.
    pub initial_brightness: f32,
    /// Fixed top margin of the rendered text.
    pub text_top: i32,
    pub text_scale: f32,
    /// Minimum time between two accepted presses of an offset button.
    pub debounce_ms: u64,
    /// Mix factor used for every stopwatch frame. Not normalized to [0, 1].
    pub stopwatch_mix: f32,
    pub curve: DayNightCurve,
    pub sync: SyncConfig,
}

impl ClockConfig {
    pub const DEFAULT: Self = Self {
        tick_period_ms: 100,
        brightness_step: 0.01,
        initial_brightness: 0.5,
        text_top: 2,
        text_scale: 1.0,
        debounce_ms: 50,
        stopwatch_mix: 50.0,
        curve: DayNightCurve::DEFAULT,
        sync: SyncConfig::DEFAULT,
    };

    pub fn with_tick_period_ms(mut self, tick_period_ms: u32) -> Self {
        self.tick_period_ms = tick_period_ms;
        self
    }

    pub fn with_brightness_step(mut self, step: f32) -> Self {
        self.brightness_step = step;
        self
    }

    pub fn with_initial_brightness(mut self, brightness: f32) -> Self {
        self.initial_brightness = brightness;
        self
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn with_curve(mut self, curve: DayNightCurve) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_sync(mut self, sync: SyncConfig) -> Self {
        self.sync = sync;
        self
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
