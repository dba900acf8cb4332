//! Blocking textual command loop for hosts without physical buttons.

use crate::command::{Command, MENU, PROMPT};
use crate::state::SharedClock;
use embassy_sync::blocking_mutex::raw::RawMutex;
use std::io::{self, BufRead, Write};

/// Reply printed for input that is not a command.
pub const INVALID_COMMAND: &str = "Invalid command!";

/// Prompts, reads one line and applies it. Returns `Ok(false)` at end of input.
pub fn step<R, In, Out>(clock: &SharedClock<R>, input: &mut In, output: &mut Out) -> io::Result<bool>
where
    R: RawMutex,
    In: BufRead,
    Out: Write,
{
    write!(output, "{}{}", MENU, PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }

    match Command::parse(&line) {
        Ok(command) => clock.apply(command),
        Err(err) => {
            warn!("rejected command: {:?}", err);
            writeln!(output, "{}", INVALID_COMMAND)?;
        }
    }
    Ok(true)
}

/// Runs [`step`] until the input is exhausted.
///
/// On the appliance the input never ends; hosts return once stdin closes.
pub fn run<R, In, Out>(clock: &SharedClock<R>, mut input: In, mut output: Out) -> io::Result<()>
where
    R: RawMutex,
    In: BufRead,
    Out: Write,
{
    while step(clock, &mut input, &mut output)? {}
    Ok(())
}
