//! Scripted key source for tests
//!
//! Replays a fixed list of key presses without touching the OS hook.

use std::thread;

use super::keys::KeyEvent;
use super::listener::{HookError, KeySource};

/// A [`KeySource`] that replays canned events or fails on registration
pub struct MockSource {
    events: Vec<KeyEvent>,
    failure: Option<HookError>,
    hold: bool,
}

impl MockSource {
    /// Replay `events`, then keep the hook "running" forever
    pub fn replaying(events: Vec<KeyEvent>) -> Self {
        Self {
            events,
            failure: None,
            hold: true,
        }
    }

    /// Replay `events`, then return as if the hook had stopped
    pub fn finite(events: Vec<KeyEvent>) -> Self {
        Self {
            events,
            failure: None,
            hold: false,
        }
    }

    /// Fail registration with `err`
    pub fn failing(err: HookError) -> Self {
        Self {
            events: Vec::new(),
            failure: Some(err),
            hold: false,
        }
    }
}

impl KeySource for MockSource {
    fn listen<F>(self, mut handler: F) -> Result<(), HookError>
    where
        F: FnMut(KeyEvent) + Send + 'static,
    {
        if let Some(err) = self.failure {
            return Err(err);
        }

        for event in self.events {
            handler(event);
        }

        if self.hold {
            loop {
                thread::park();
            }
        }

        Ok(())
    }
}
