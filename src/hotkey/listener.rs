//! Global keyboard hook
//!
//! The hook runs on a dedicated thread for the life of the process and feeds
//! each key press straight into the dispatcher. The only thing that ever
//! comes back to the main task is a registration failure.

use std::thread;

use rdev::{EventType, ListenError};
use tokio::sync::oneshot;
use tracing::{debug, info};

use super::keys::KeyEvent;
use crate::dispatch::{CommandSink, Dispatcher};

/// Errors that can occur installing or running the keyboard hook
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("keyboard hook is not available on this system: {reason}")]
    Unavailable { reason: String },

    #[error("permission denied installing keyboard hook: {reason}")]
    PermissionDenied { reason: String },

    #[error("failed to spawn listener thread: {0}")]
    ThreadSpawn(String),

    #[error("keyboard hook stopped unexpectedly")]
    Stopped,
}

impl HookError {
    /// Platform-specific remediation for fatal hook errors
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            HookError::PermissionDenied { .. } => Some(if cfg!(target_os = "windows") {
                "run key-relay from an Administrator terminal"
            } else if cfg!(target_os = "macos") {
                "grant Accessibility and Input Monitoring access to your terminal in System Settings > Privacy & Security"
            } else {
                "add your user to the `input` group or run key-relay as root"
            }),
            HookError::Unavailable { .. } => Some(if cfg!(target_os = "linux") {
                "run key-relay inside an X11 session with the RECORD extension enabled"
            } else {
                "run key-relay inside a graphical desktop session"
            }),
            HookError::ThreadSpawn(_) | HookError::Stopped => None,
        }
    }
}

impl From<ListenError> for HookError {
    fn from(err: ListenError) -> Self {
        let reason = format!("{err:?}");
        match err {
            ListenError::EventTapError
            | ListenError::KeyHookError(_)
            | ListenError::MouseHookError(_) => HookError::PermissionDenied { reason },
            _ => HookError::Unavailable { reason },
        }
    }
}

/// A system-wide stream of key presses
pub trait KeySource {
    /// Deliver every key press to `handler`, blocking the calling thread
    ///
    /// Only returns when the hook cannot be installed or stops running.
    fn listen<F>(self, handler: F) -> Result<(), HookError>
    where
        F: FnMut(KeyEvent) + Send + 'static;
}

/// Key presses from the OS hook via `rdev`
#[derive(Debug, Default, Clone, Copy)]
pub struct RdevSource;

impl KeySource for RdevSource {
    fn listen<F>(self, mut handler: F) -> Result<(), HookError>
    where
        F: FnMut(KeyEvent) + Send + 'static,
    {
        rdev::listen(move |event| {
            // Releases and mouse events are ignored
            if let EventType::KeyPress(key) = event.event_type {
                handler(KeyEvent::from_key(key));
            }
        })
        .map_err(HookError::from)
    }
}

/// Runs a key source on its own thread, dispatching every key press
pub struct HotkeyListener<K> {
    source: K,
}

impl<K> HotkeyListener<K>
where
    K: KeySource + Send + 'static,
{
    pub fn new(source: K) -> Self {
        Self { source }
    }

    /// Start the listener thread
    ///
    /// The returned receiver resolves if the hook fails to register or
    /// stops. It stays pending for as long as the hook is healthy.
    pub fn start<S>(self, dispatcher: Dispatcher<S>) -> Result<oneshot::Receiver<HookError>, HookError>
    where
        S: CommandSink + Send + 'static,
    {
        let (failure_tx, failure_rx) = oneshot::channel();
        let source = self.source;

        thread::Builder::new()
            .name("hotkey-listener".to_string())
            .spawn(move || {
                info!("hotkey listener thread started");

                let result = source.listen(move |event| {
                    dispatcher.handle(&event);
                });

                let err = match result {
                    Err(e) => e,
                    Ok(()) => HookError::Stopped,
                };
                debug!(error = %err, "hotkey listener thread exiting");
                let _ = failure_tx.send(err);
            })
            .map_err(|e| HookError::ThreadSpawn(e.to_string()))?;

        Ok(failure_rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::net::UdpSocket;
    use std::time::Duration;

    use crate::dispatch::UdpSink;
    use crate::hotkey::mock::MockSource;

    fn receiver() -> UdpSocket {
        let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
        socket
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();
        socket
    }

    #[test]
    fn test_permission_errors() {
        let err = HookError::from(ListenError::KeyHookError(5));
        assert!(matches!(err, HookError::PermissionDenied { .. }));
        assert!(err.to_string().contains("permission denied"));
        assert!(err.hint().is_some());

        let err = HookError::from(ListenError::EventTapError);
        assert!(matches!(err, HookError::PermissionDenied { .. }));
    }

    #[test]
    fn test_missing_capability_errors() {
        let err = HookError::from(ListenError::MissingDisplayError);
        assert!(matches!(err, HookError::Unavailable { .. }));
        assert!(err.hint().is_some());

        let err = HookError::from(ListenError::XRecordExtensionError);
        assert!(matches!(err, HookError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn test_registration_failure_is_reported() {
        let listener = HotkeyListener::new(MockSource::failing(HookError::PermissionDenied {
            reason: "access denied".to_string(),
        }));

        let failure = listener
            .start(Dispatcher::new(UdpSink::new("127.0.0.1:9".parse().unwrap())))
            .unwrap();
        let err = failure.await.unwrap();
        assert!(matches!(err, HookError::PermissionDenied { .. }));
    }

    #[tokio::test]
    async fn test_events_reach_dispatcher() {
        let rx = receiver();
        let events = vec![
            KeyEvent::new("a", 30),
            KeyEvent::new("left", 75),
            KeyEvent::new("numpad 0", 82),
        ];
        let listener = HotkeyListener::new(MockSource::finite(events));

        let failure = listener
            .start(Dispatcher::new(UdpSink::new(rx.local_addr().unwrap())))
            .unwrap();
        // A source that returns without error still counts as a stopped hook
        assert!(matches!(failure.await.unwrap(), HookError::Stopped));

        let mut buf = [0u8; 64];
        let len = rx.recv(&mut buf).unwrap();
        assert_eq!(&buf[..len], b"nav:left");
        let len = rx.recv(&mut buf).unwrap();
        assert_eq!(&buf[..len], b"toggle");
    }
}
