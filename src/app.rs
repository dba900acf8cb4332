//! Appliance wiring for single-context targets.
//!
//! [`ClockApp`] bundles a [`RenderScheduler`] and an [`InputDispatcher`]
//! around one [`SharedClock`]. Its [`tick`](ClockApp::tick) is the body of
//! the periodic timer callback: poll the buttons, then run a render pass.
//! Targets with a separate foreground context (a console, a button task)
//! keep their own [`InputDispatcher`] or call [`SharedClock::apply`] on the
//! same shared state.

use crate::command::{Command, CommandError};
use crate::config::ClockConfig;
use crate::display::Surface;
use crate::input::{InputDispatcher, InputEvent, InputSource, PollEvents};
use crate::render::{Frame, RenderScheduler};
use crate::state::SharedClock;
use crate::sync::{sync_time, SyncOutcome, TimeSync};
use crate::time::{TimeInstant, TimeSource, WallClock};
use crate::types::Button;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::delay::DelayNs;

/// Result of one timer tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub events: PollEvents,
    pub frame: Frame,
}

/// The complete clock appliance.
///
/// # Type Parameters
/// * `'a` - Lifetime of the shared state and time source references
/// * `R` - Raw mutex guarding the shared state
/// * `S` - Drawing surface implementation type
/// * `W` - Real-time clock implementation type
/// * `B` - Button hardware implementation type
/// * `I` - Monotonic instant type used for debouncing
/// * `T` - Monotonic time source implementation type
pub struct ClockApp<'a, R, S, W, B, I, T>
where
    R: RawMutex,
    S: Surface,
    W: WallClock,
    B: InputSource,
    I: TimeInstant,
    T: TimeSource<I>,
{
    renderer: RenderScheduler<'a, R, S, W>,
    dispatcher: InputDispatcher<'a, R, I, T>,
    input: B,
}

impl<'a, R, S, W, B, I, T> ClockApp<'a, R, S, W, B, I, T>
where
    R: RawMutex,
    S: Surface,
    W: WallClock,
    B: InputSource,
    I: TimeInstant,
    T: TimeSource<I>,
{
    pub fn new(
        clock: &'a SharedClock<R>,
        surface: S,
        wall_clock: W,
        input: B,
        time_source: &'a T,
        config: ClockConfig,
    ) -> Self {
        Self {
            renderer: RenderScheduler::new(clock, surface, wall_clock, config),
            dispatcher: InputDispatcher::new(
                clock,
                time_source,
                config.debounce_ms,
                config.brightness_step,
            ),
            input,
        }
    }

    /// One-time startup: initial brightness, then the best-effort time sync.
    ///
    /// The display keeps ticking while the sync waits for the network.
    pub fn bootstrap<N, D>(&mut self, sync: &mut N, delay: &mut D) -> SyncOutcome
    where
        N: TimeSync,
        D: DelayNs,
    {
        let config = *self.renderer.config();
        self.input.set_brightness(config.initial_brightness);

        let outcome = sync_time(sync, delay, &config.sync, || {
            self.tick();
        });
        info!("startup sync: {:?}", outcome);
        outcome
    }

    /// Timer callback body: poll inputs, then render.
    pub fn tick(&mut self) -> Tick {
        let events = self.dispatcher.poll(&mut self.input);
        let frame = self.renderer.run_pass();
        Tick { events, frame }
    }

    /// Ticks forever at the configured period.
    ///
    /// Rendering time is not subtracted from the wait; use a hardware timer
    /// driving [`ClockApp::tick`] where drift matters.
    pub fn run<D: DelayNs>(&mut self, delay: &mut D) -> ! {
        let period_ms = self.renderer.config().tick_period_ms;
        loop {
            self.tick();
            delay.delay_ms(period_ms);
        }
    }

    /// Forwards a pin interrupt to the dispatcher.
    pub fn on_falling_edge(&mut self, button: Button) -> Option<InputEvent> {
        self.dispatcher.on_falling_edge(button)
    }

    /// Applies one line of the textual command interface.
    pub fn handle_line(&self, line: &str) -> Result<Command, CommandError> {
        self.dispatcher.handle_line(line)
    }

    pub fn renderer(&self) -> &RenderScheduler<'a, R, S, W> {
        &self.renderer
    }

    pub fn surface(&self) -> &S {
        self.renderer.surface()
    }

    pub fn input(&self) -> &B {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut B {
        &mut self.input
    }
}
