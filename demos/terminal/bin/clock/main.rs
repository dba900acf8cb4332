//! Stopwatch clock in a terminal.
//!
//! A render thread ticks the clock every 100 ms and draws the matrix at the
//! top of the screen; the main thread reads single-letter commands below it.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use std::io::{self, Write};
use std::thread;
use stopwatch_clock::{console, ClockApp, ClockConfig, SharedClock};
use terminal_demo::hardware::{HostSync, HostTimer, NoButtons, SleepDelay, SystemClock};
use terminal_demo::surface::{TerminalSurface, LINES};

static CLOCK: SharedClock<CriticalSectionRawMutex> = SharedClock::new();
static TIMER: HostTimer = HostTimer;

/// Render context: startup sync, then tick forever.
fn render() {
    let mut app = ClockApp::new(
        &CLOCK,
        TerminalSurface::new(io::stdout()),
        SystemClock,
        NoButtons::default(),
        &TIMER,
        ClockConfig::default(),
    );
    let mut delay = SleepDelay;
    app.bootstrap(&mut HostSync, &mut delay);
    app.run(&mut delay)
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Clear the screen and keep the prompt scrolling below the matrix.
    let mut stdout = io::stdout();
    write!(stdout, "\x1b[2J\x1b[{};r\x1b[{};1H", LINES + 1, LINES + 1)?;
    stdout.flush()?;

    thread::Builder::new().name("render".into()).spawn(render)?;

    log::info!("ready");
    let result = console::run(&CLOCK, io::stdin().lock(), io::stdout());

    // Restore the full scroll region on exit.
    write!(stdout, "\x1b[r")?;
    stdout.flush()?;
    result
}
