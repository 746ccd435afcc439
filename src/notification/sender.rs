// Notification Sender
//
// Writes debounced notifications to the terminal output stream.
// Each Dispatcher owns its debounce ledger.

use super::debouncer::{debounce_key, DebounceLedger};
use super::escape;
use crate::types::NotificationMethod;
use parking_lot::{Mutex, MutexGuard};
use std::io::{self, Write};
use std::time::Instant;

pub struct Dispatcher<W> {
    ledger: Mutex<DebounceLedger>,
    output: Mutex<W>,
}

impl Dispatcher<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Dispatcher<W> {
    pub fn new(output: W) -> Self {
        Self::with_ledger(output, DebounceLedger::default())
    }

    pub fn with_ledger(output: W, ledger: DebounceLedger) -> Self {
        Self {
            ledger: Mutex::new(ledger),
            output: Mutex::new(output),
        }
    }

    /// Send a notification unless an identical one was attempted recently
    ///
    /// Returns true if the notification was written.
    pub fn dispatch(&self, method: NotificationMethod, title: &str, message: &str) -> bool {
        self.dispatch_at(method, title, message, Instant::now())
    }

    pub fn dispatch_at(
        &self,
        method: NotificationMethod,
        title: &str,
        message: &str,
        now: Instant,
    ) -> bool {
        if !self.ledger.lock().should_send(debounce_key(method, message), now) {
            tracing::debug!(%method, body = message, "notification debounced");
            return false;
        }

        let sequence = escape::encode(method, title, message);
        match self.write(sequence.as_bytes()) {
            Ok(()) => {
                tracing::debug!(%method, title, body = message, "notification sent");
                true
            }
            Err(e) => {
                tracing::warn!(%method, error = %e, "failed to write notification");
                false
            }
        }
    }

    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        let mut output = self.output.lock();
        output.write_all(bytes)?;
        output.flush()
    }

    /// Access the underlying output stream
    pub fn output(&self) -> MutexGuard<'_, W> {
        self.output.lock()
    }
}
