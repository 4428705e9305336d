//! Command dispatch
//!
//! Maps a fixed whitelist of keys to short ASCII commands and fires each one
//! at the local listener as a single UDP datagram.

mod command;
mod sender;

pub use command::{Command, UnknownCommand, NUMPAD_ZERO_SCAN_CODE};
pub use sender::{CommandSink, Dispatcher, SendError, UdpSink};
