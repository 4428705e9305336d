//! Hotkey module for global keyboard event listening
//!
//! Uses `rdev` to install the OS low-level keyboard hook (Win32 hooks, X11
//! RECORD, Quartz event taps) and turns each key press into a [`KeyEvent`].

mod keys;
mod listener;

#[cfg(test)]
pub mod mock;

pub use keys::KeyEvent;
pub use listener::{HookError, HotkeyListener, KeySource, RdevSource};
