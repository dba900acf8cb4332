//! Integration tests for ClockApp and cross-context use of SharedClock

mod common;
use common::*;

use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
use stopwatch_clock::{
    Button, ClockApp, ClockConfig, Command, DateTime, Elapsed, Frame, InputEvent, Mode,
    RenderScheduler, SharedClock, SyncOutcome,
};

#[test]
fn bootstrap_without_credentials_skips_sync() {
    let clock = SharedClock::<NoopRawMutex>::new();
    let wall = MockWallClock::at(7, 0, 0);
    let timer = MockTimeSource::new();
    let mut app = ClockApp::new(
        &clock,
        MockSurface::galactic(),
        &wall,
        MockInput::new(),
        &timer,
        ClockConfig::default(),
    );
    let mut sync = MockSync::without_credentials();
    let mut delay = CountingDelay::new();

    let outcome = app.bootstrap(&mut sync, &mut delay);

    assert_eq!(outcome, SyncOutcome::Skipped);
    assert_eq!(app.input().brightness(), 0.5);
    assert_eq!(app.surface().updates(), 0);
    assert_eq!(delay.total_ms, 0);
    assert!(!sync.disconnected);
}

#[test]
fn display_keeps_ticking_while_link_comes_up() {
    let clock = SharedClock::<NoopRawMutex>::new();
    let wall = MockWallClock::at(7, 0, 0);
    let timer = MockTimeSource::new();
    let mut app = ClockApp::new(
        &clock,
        MockSurface::galactic(),
        &wall,
        MockInput::new(),
        &timer,
        ClockConfig::default(),
    );
    let mut sync = MockSync::connecting_for(3, true);
    let mut delay = CountingDelay::new();

    let outcome = app.bootstrap(&mut sync, &mut delay);

    assert!(outcome.is_synced());
    assert_eq!(app.surface().updates(), 3);
    assert_eq!(delay.total_ms, 600);
    assert!(sync.time_set);
    assert!(sync.disconnected);
}

#[test]
fn sync_gives_up_after_bounded_wait() {
    let clock = SharedClock::<NoopRawMutex>::new();
    let wall = MockWallClock::at(7, 0, 0);
    let timer = MockTimeSource::new();
    let mut app = ClockApp::new(
        &clock,
        MockSurface::galactic(),
        &wall,
        MockInput::new(),
        &timer,
        ClockConfig::default(),
    );
    let mut sync = MockSync::connecting_for(1_000, true);
    let mut delay = CountingDelay::new();

    let outcome = app.bootstrap(&mut sync, &mut delay);

    assert_eq!(outcome, SyncOutcome::TimedOut);
    assert_eq!(delay.total_ms, 100 * 200);
    assert!(!sync.time_set);
    assert!(sync.disconnected);
}

#[test]
fn failed_time_request_still_disconnects() {
    let clock = SharedClock::<NoopRawMutex>::new();
    let wall = MockWallClock::at(7, 0, 0);
    let timer = MockTimeSource::new();
    let mut app = ClockApp::new(
        &clock,
        MockSurface::galactic(),
        &wall,
        MockInput::new(),
        &timer,
        ClockConfig::default(),
    );
    let mut sync = MockSync::connecting_for(0, true);
    sync.fail_request = true;
    let mut delay = CountingDelay::new();

    assert_eq!(app.bootstrap(&mut sync, &mut delay), SyncOutcome::Failed);
    assert!(sync.disconnected);
    assert_eq!(clock.snapshot().mode, Mode::Clock);
}

#[test]
fn tick_polls_buttons_before_rendering() {
    let clock = SharedClock::<NoopRawMutex>::new();
    let wall = MockWallClock::at(7, 0, 0);
    let timer = MockTimeSource::new();
    let mut app = ClockApp::new(
        &clock,
        MockSurface::galactic(),
        &wall,
        MockInput::new(),
        &timer,
        ClockConfig::default(),
    );

    app.input_mut().press(Button::A);
    let tick = app.tick();

    assert_eq!(tick.events.as_slice(), &[InputEvent::Command(Command::Start)]);
    assert_eq!(
        tick.frame,
        Frame::Stopwatch {
            mode: Mode::Running,
            value: Elapsed::new(0, 0, 0, 1)
        }
    );
}

#[test]
fn textual_stop_and_recall_through_app() {
    let clock = SharedClock::<NoopRawMutex>::new();
    let wall = MockWallClock::at(7, 0, 0);
    let timer = MockTimeSource::new();
    let mut app = ClockApp::new(
        &clock,
        MockSurface::galactic(),
        &wall,
        MockInput::new(),
        &timer,
        ClockConfig::default(),
    );

    app.handle_line("A").unwrap();
    for _ in 0..25 {
        app.tick();
    }
    app.handle_line("b").unwrap();
    for _ in 0..10 {
        app.tick();
    }
    app.handle_line("r").unwrap();
    app.handle_line("c").unwrap();

    assert_eq!(
        app.tick().frame,
        Frame::Stopwatch {
            mode: Mode::Recall,
            value: Elapsed::new(0, 0, 2, 5)
        }
    );

    assert!(app.handle_line("q").is_err());
    app.handle_line("d").unwrap();
    assert!(matches!(app.tick().frame, Frame::WallClock { hour: 7, .. }));
}

#[test]
fn offset_interrupts_reach_the_display() {
    let clock = SharedClock::<NoopRawMutex>::new();
    let wall = MockWallClock::at(23, 59, 30);
    let timer = MockTimeSource::new();
    let mut app = ClockApp::new(
        &clock,
        MockSurface::galactic(),
        &wall,
        MockInput::new(),
        &timer,
        ClockConfig::default(),
    );

    app.tick();
    assert_eq!(app.on_falling_edge(Button::OffsetUp), Some(InputEvent::Offset(1)));
    timer.advance(500);
    assert_eq!(app.on_falling_edge(Button::OffsetUp), Some(InputEvent::Offset(2)));

    // Same wall second, but the offset change alone does not force a redraw.
    assert_eq!(app.tick().frame, Frame::Unchanged);

    wall.set(23, 59, 31);
    assert_eq!(
        app.tick().frame,
        Frame::WallClock {
            hour: 1,
            minute: 59,
            second: 31
        }
    );
}

#[test]
fn render_and_command_contexts_share_state() {
    static CLOCK: SharedClock<CriticalSectionRawMutex> = SharedClock::new();

    CLOCK.apply(Command::Start);
    let wall = FixedWallClock(DateTime::from_hms(10, 0, 0));

    std::thread::scope(|scope| {
        let render = scope.spawn(|| {
            let mut renderer =
                RenderScheduler::new(&CLOCK, MockSurface::galactic(), wall, ClockConfig::default());
            for _ in 0..50 {
                renderer.run_pass();
            }
            renderer.into_parts().0.updates()
        });

        let commands = scope.spawn(|| {
            for _ in 0..3 {
                CLOCK.adjust_offset(1);
            }
        });

        commands.join().unwrap();
        assert_eq!(render.join().unwrap(), 50);
    });

    let snapshot = CLOCK.snapshot();
    assert_eq!(snapshot.elapsed, Elapsed::new(0, 0, 5, 0));
    assert_eq!(snapshot.utc_offset_hours, 3);
    assert_eq!(snapshot.mode, Mode::Running);
}
