//! Clock state machine and the lock that guards it.
//!
//! [`ClockState`] holds every field the render and input paths share: the
//! active mode, the stopwatch accumulator, the stored lap, the UTC display
//! offset and the wall-clock redraw marker. [`SharedClock`] wraps it in a
//! single blocking mutex so both execution contexts always observe a
//! consistent snapshot of all fields together.

use crate::command::Command;
use crate::types::{Elapsed, Mode};
use core::cell::RefCell;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;

/// Copy of the state taken under the lock for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub mode: Mode,
    pub running: bool,
    pub elapsed: Elapsed,
    pub stored_elapsed: Elapsed,
    pub utc_offset_hours: i32,
}

/// Mutable model of the appliance.
///
/// Transitions never fail: every [`Command`] is accepted from every mode and
/// re-entering the current mode is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockState {
    mode: Mode,
    running: bool,
    elapsed: Elapsed,
    stored_elapsed: Elapsed,
    utc_offset_hours: i32,
    last_rendered_second: Option<u8>,
}

impl ClockState {
    /// Wall-clock mode, stopwatch zeroed, no offset, first frame pending.
    pub const fn new() -> Self {
        Self {
            mode: Mode::Clock,
            running: false,
            elapsed: Elapsed::ZERO,
            stored_elapsed: Elapsed::ZERO,
            utc_offset_hours: 0,
            last_rendered_second: None,
        }
    }

    /// Applies a command and returns the mode that was active before it.
    pub fn apply(&mut self, command: Command) -> Mode {
        let previous = self.mode;

        match command {
            Command::Start => {
                self.elapsed = Elapsed::ZERO;
                self.running = true;
                self.mode = Mode::Running;
            }
            Command::Stop => {
                self.stored_elapsed = self.elapsed;
                self.running = false;
                self.mode = Mode::Stopped;
            }
            Command::Recall => {
                self.running = false;
                self.mode = Mode::Recall;
            }
            Command::ClockView => {
                self.running = false;
                self.mode = Mode::Clock;
                // Redraw on the next pass even within the same RTC second.
                self.last_rendered_second = None;
            }
            Command::Reset => {
                self.elapsed = Elapsed::ZERO;
                self.running = false;
                self.mode = Mode::Running;
            }
        }

        previous
    }

    /// Shifts the display offset and returns the new value.
    pub fn adjust_offset(&mut self, delta: i32) -> i32 {
        self.utc_offset_hours = self.utc_offset_hours.saturating_add(delta);
        self.utc_offset_hours
    }

    /// Advances the stopwatch by one tick if it is running, then snapshots.
    pub fn advance(&mut self) -> Snapshot {
        if self.mode == Mode::Running && self.running {
            self.elapsed.tick();
        }
        self.snapshot()
    }

    /// Marks `second` as rendered. Returns false if it already was.
    pub fn claim_second(&mut self, second: u8) -> bool {
        if self.last_rendered_second == Some(second) {
            return false;
        }
        self.last_rendered_second = Some(second);
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            running: self.running,
            elapsed: self.elapsed,
            stored_elapsed: self.stored_elapsed,
            utc_offset_hours: self.utc_offset_hours,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed(&self) -> Elapsed {
        self.elapsed
    }

    pub fn stored_elapsed(&self) -> Elapsed {
        self.stored_elapsed
    }

    pub fn utc_offset_hours(&self) -> i32 {
        self.utc_offset_hours
    }

    pub fn last_rendered_second(&self) -> Option<u8> {
        self.last_rendered_second
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new()
    }
}

/// [`ClockState`] behind one blocking mutex.
///
/// `R` selects the raw mutex: `CriticalSectionRawMutex` when an interrupt
/// handler or another thread renders, `NoopRawMutex` for single-context use.
/// Closures passed to [`SharedClock::lock`] must not call back into the same
/// `SharedClock`.
pub struct SharedClock<R: RawMutex> {
    inner: Mutex<R, RefCell<ClockState>>,
}

impl<R: RawMutex> SharedClock<R> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(ClockState::new())),
        }
    }

    /// Runs `f` with exclusive access to the state.
    pub fn lock<U>(&self, f: impl FnOnce(&mut ClockState) -> U) -> U {
        self.inner.lock(|state| f(&mut state.borrow_mut()))
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock(|state| state.snapshot())
    }

    /// Applies a command under the lock.
    pub fn apply(&self, command: Command) {
        let (previous, current) = self.lock(|state| (state.apply(command), state.mode()));
        info!("{:?}: {:?} -> {:?}", command, previous, current);
    }

    /// Adjusts the UTC display offset under the lock and returns the new value.
    pub fn adjust_offset(&self, delta: i32) -> i32 {
        let offset = self.lock(|state| state.adjust_offset(delta));
        info!("UTC offset now {}", offset);
        offset
    }
}

impl<R: RawMutex> Default for SharedClock<R> {
    fn default() -> Self {
        Self::new()
    }
}
