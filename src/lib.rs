#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ClockState`**: The shared model: mode, stopwatch, stored lap, UTC display offset
//! - **`SharedClock`**: `ClockState` behind a single blocking mutex shared by both execution contexts
//! - **`Command`**: Mode transitions (`Start`, `Stop`, `Recall`, `ClockView`, `Reset`), also parsed from `A/B/C/D/R`
//! - **`InputDispatcher`**: Polls buttons, debounces the offset buttons and applies commands
//! - **`RenderScheduler`**: Periodic render pass drawing a gradient background and outlined text
//! - **`ClockApp`**: Wires the above together and runs the startup time sync
//! - **`Surface`**, **`InputSource`**, **`WallClock`**, **`TimeSync`**: Traits to implement for your hardware
//!
//! Stopwatch views use a fixed palette; the wall clock view uses a cosine
//! day/night curve that peaks at local midday.

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

pub mod app;
pub mod color;
pub mod command;
pub mod config;
#[cfg(feature = "std")]
pub mod console;
pub mod display;
pub mod input;
pub mod render;
pub mod state;
pub mod sync;
pub mod time;
pub mod types;

pub use app::{ClockApp, Tick};
pub use color::{Gradient, HsvColor, day_night_color, day_night_palette, from_hsv, percent_to_midday, stopwatch_palette};
pub use command::{Command, CommandError};
pub use config::{ClockConfig, DayNightCurve, SyncConfig};
pub use display::{Surface, centered_x};
pub use input::{EdgeDetector, InputDispatcher, InputEvent, InputSource};
pub use render::{Frame, RenderScheduler};
pub use state::{ClockState, SharedClock, Snapshot};
pub use sync::{LinkStatus, SyncOutcome, TimeSync, sync_time};
pub use time::{DateTime, TimeDuration, TimeInstant, TimeSource, WallClock};
pub use types::{Button, Elapsed, Mode};

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

/// Outline pen colour.
pub const BLACK: Srgb<u8> = Srgb::new(0, 0, 0);

/// Text pen colour.
pub const WHITE: Srgb<u8> = Srgb::new(255, 255, 255);
