//! Button and command input.
//!
//! Mode and brightness buttons are level checked on every poll. The UTC
//! offset buttons are edge triggered: each physical press must change the
//! offset exactly once no matter how long it is held or how much it bounces,
//! so every offset button gets its own [`EdgeDetector`].

use crate::command::{Command, CommandError};
use crate::state::SharedClock;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::Button;
use embassy_sync::blocking_mutex::raw::RawMutex;
use heapless::Vec;

/// Trait for abstracting the button and brightness hardware.
pub trait InputSource {
    /// Returns true while `button` is held down.
    fn is_pressed(&self, button: Button) -> bool;

    /// Changes display brightness by `delta`. Implementations clamp.
    fn adjust_brightness(&mut self, delta: f32);

    /// Sets display brightness to an absolute level in [0, 1].
    fn set_brightness(&mut self, level: f32);
}

/// Debounce state of a single edge-triggered button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeState {
    Idle,
    Pressed,
}

/// Turns a bouncing button into one event per falling edge.
///
/// A press is accepted on the `Idle -> Pressed` transition unless it falls
/// within `debounce_ms` of the previously accepted press.
#[derive(Debug, Clone, Copy)]
pub struct EdgeDetector<I: TimeInstant> {
    state: EdgeState,
    last_press: Option<I>,
    debounce_ms: u64,
}

impl<I: TimeInstant> EdgeDetector<I> {
    pub const fn new(debounce_ms: u64) -> Self {
        Self {
            state: EdgeState::Idle,
            last_press: None,
            debounce_ms,
        }
    }

    /// Feeds a sampled level. Returns true once per accepted press.
    pub fn sample(&mut self, pressed: bool, now: I) -> bool {
        match (self.state, pressed) {
            (EdgeState::Idle, true) => {
                self.state = EdgeState::Pressed;
                self.accept(now)
            }
            (EdgeState::Pressed, false) => {
                self.state = EdgeState::Idle;
                false
            }
            _ => false,
        }
    }

    /// Feeds a falling edge reported by an interrupt. Returns true if accepted.
    pub fn falling_edge(&mut self, now: I) -> bool {
        self.state = EdgeState::Pressed;
        self.accept(now)
    }

    pub fn state(&self) -> EdgeState {
        self.state
    }

    fn accept(&mut self, now: I) -> bool {
        if let Some(last) = self.last_press {
            if now.duration_since(last).as_millis() < self.debounce_ms {
                return false;
            }
        }
        self.last_press = Some(now);
        true
    }
}

/// What a poll or edge event did.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Brightness changed by this delta.
    Brightness(f32),
    /// A mode command was applied.
    Command(Command),
    /// The UTC offset changed; carries the new offset.
    Offset(i32),
}

/// Events produced by a single poll: one level event plus both offset buttons.
pub type PollEvents = Vec<InputEvent, 3>;

/// Feeds button presses and textual commands into the shared clock state.
///
/// # Type Parameters
/// * `'a` - Lifetime of the shared state and time source references
/// * `R` - Raw mutex guarding the shared state
/// * `I` - Time instant type used for debouncing
/// * `T` - Time source implementation type
pub struct InputDispatcher<'a, R: RawMutex, I: TimeInstant, T: TimeSource<I>> {
    clock: &'a SharedClock<R>,
    time_source: &'a T,
    offset_up: EdgeDetector<I>,
    offset_down: EdgeDetector<I>,
    brightness_step: f32,
}

impl<'a, R: RawMutex, I: TimeInstant, T: TimeSource<I>> InputDispatcher<'a, R, I, T> {
    pub fn new(
        clock: &'a SharedClock<R>,
        time_source: &'a T,
        debounce_ms: u64,
        brightness_step: f32,
    ) -> Self {
        Self {
            clock,
            time_source,
            offset_up: EdgeDetector::new(debounce_ms),
            offset_down: EdgeDetector::new(debounce_ms),
            brightness_step,
        }
    }

    /// Samples every button once.
    ///
    /// Level buttons are checked in priority order (brightness up, brightness
    /// down, A, B, C, D) and only the first one held is acted on. Both offset
    /// buttons are sampled through their edge detectors.
    pub fn poll<B: InputSource>(&mut self, input: &mut B) -> PollEvents {
        let mut events = PollEvents::new();

        if let Some(event) = self.poll_levels(input) {
            let _ = events.push(event);
        }

        let now = self.time_source.now();
        if self.offset_up.sample(input.is_pressed(Button::OffsetUp), now) {
            let _ = events.push(self.shift_offset(1));
        }
        if self
            .offset_down
            .sample(input.is_pressed(Button::OffsetDown), now)
        {
            let _ = events.push(self.shift_offset(-1));
        }

        events
    }

    fn poll_levels<B: InputSource>(&mut self, input: &mut B) -> Option<InputEvent> {
        if input.is_pressed(Button::BrightnessUp) {
            input.adjust_brightness(self.brightness_step);
            return Some(InputEvent::Brightness(self.brightness_step));
        }
        if input.is_pressed(Button::BrightnessDown) {
            input.adjust_brightness(-self.brightness_step);
            return Some(InputEvent::Brightness(-self.brightness_step));
        }

        let button = [Button::A, Button::B, Button::C, Button::D]
            .into_iter()
            .find(|button| input.is_pressed(*button))?;
        let command = Command::for_button(button)?;
        self.dispatch(command);
        Some(InputEvent::Command(command))
    }

    /// Handles a falling edge reported by a pin interrupt.
    ///
    /// Offset buttons go through their debouncers; mode buttons apply their
    /// command directly. Brightness buttons are level driven and ignored here.
    pub fn on_falling_edge(&mut self, button: Button) -> Option<InputEvent> {
        match button {
            Button::OffsetUp => {
                let now = self.time_source.now();
                self.offset_up
                    .falling_edge(now)
                    .then(|| self.shift_offset(1))
            }
            Button::OffsetDown => {
                let now = self.time_source.now();
                self.offset_down
                    .falling_edge(now)
                    .then(|| self.shift_offset(-1))
            }
            _ => {
                let command = Command::for_button(button)?;
                self.dispatch(command);
                Some(InputEvent::Command(command))
            }
        }
    }

    /// Applies a command through the shared transition table.
    pub fn dispatch(&self, command: Command) {
        self.clock.apply(command);
    }

    /// Parses and applies one line of the textual command interface.
    ///
    /// Invalid input leaves the state untouched.
    pub fn handle_line(&self, line: &str) -> Result<Command, CommandError> {
        match Command::parse(line) {
            Ok(command) => {
                self.dispatch(command);
                Ok(command)
            }
            Err(err) => {
                warn!("rejected command: {:?}", err);
                Err(err)
            }
        }
    }

    fn shift_offset(&self, delta: i32) -> InputEvent {
        InputEvent::Offset(self.clock.adjust_offset(delta))
    }
}
