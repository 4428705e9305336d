//! Command tokens and the key lookup

use std::fmt;
use std::str::FromStr;

use crate::hotkey::KeyEvent;

/// Scan code of keypad 0 (and Insert) in set-1 numbering
pub const NUMPAD_ZERO_SCAN_CODE: u32 = 82;

/// Commands understood by the listener on the other end of the socket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Keypad 0
    Toggle,
    NavUp,
    NavDown,
    NavLeft,
    NavRight,
}

impl Command {
    /// Every command, in lookup order
    pub const ALL: [Command; 5] = [
        Command::Toggle,
        Command::NavUp,
        Command::NavDown,
        Command::NavLeft,
        Command::NavRight,
    ];

    /// Wire token for this command
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Toggle => "toggle",
            Command::NavUp => "nav:up",
            Command::NavDown => "nav:down",
            Command::NavLeft => "nav:left",
            Command::NavRight => "nav:right",
        }
    }

    /// Look up the command bound to a key press, if any
    ///
    /// Keypad 0 matches on either its name or its scan code, and wins over
    /// the arrow keys.
    pub fn for_key(event: &KeyEvent) -> Option<Self> {
        if event.name == "numpad 0" || event.scan_code == NUMPAD_ZERO_SCAN_CODE {
            return Some(Command::Toggle);
        }

        match event.name.as_str() {
            "up" => Some(Command::NavUp),
            "down" => Some(Command::NavDown),
            "left" => Some(Command::NavLeft),
            "right" => Some(Command::NavRight),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token that is not one of the five commands
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command: {0:?}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}
