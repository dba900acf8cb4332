//! Mode commands and their single-character textual form.

use crate::types::Button;
use core::fmt;

/// Actions accepted by the clock state machine.
///
/// Every command is valid from every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Zero the stopwatch and start it.
    Start,
    /// Freeze the stopwatch and store its value as the lap.
    Stop,
    /// Show the stored lap.
    Recall,
    /// Return to the wall clock.
    ClockView,
    /// Zero the stopwatch without starting it.
    Reset,
}

/// Option list printed before each textual prompt.
pub const MENU: &str = "Command options...\n\
A) Start timer.\n\
B) Stop timer.\n\
C) Recall last stopped timer.\n\
D) Display real time clock.\n\
R) Reset timer to zero.\n";

pub const PROMPT: &str = "Enter a command:";

impl Command {
    /// Parses a command letter, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let mut chars = input.trim().chars();
        let letter = chars.next().ok_or(CommandError::Empty)?;
        if chars.next().is_some() {
            return Err(CommandError::TooLong);
        }
        Self::from_letter(letter)
    }

    /// Maps a single command letter.
    pub fn from_letter(letter: char) -> Result<Self, CommandError> {
        match letter.to_ascii_lowercase() {
            'a' => Ok(Command::Start),
            'b' => Ok(Command::Stop),
            'c' => Ok(Command::Recall),
            'd' => Ok(Command::ClockView),
            'r' => Ok(Command::Reset),
            _ => Err(CommandError::Unknown(letter)),
        }
    }

    /// Command bound to a mode button, if any.
    pub fn for_button(button: Button) -> Option<Self> {
        match button {
            Button::A => Some(Command::Start),
            Button::B => Some(Command::Stop),
            Button::C => Some(Command::Recall),
            Button::D => Some(Command::ClockView),
            _ => None,
        }
    }
}

impl core::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}

/// Textual command errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Nothing but whitespace was entered.
    Empty,

    /// More than one character was entered.
    TooLong,

    /// The letter is not bound to a command.
    Unknown(char),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => write!(f, "no command entered"),
            CommandError::TooLong => write!(f, "commands are a single letter"),
            CommandError::Unknown(letter) => write!(f, "unknown command '{}'", letter),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}
