//! Host peripherals for running the stopwatch clock in a terminal.

pub mod font;
pub mod hardware;
pub mod surface;
