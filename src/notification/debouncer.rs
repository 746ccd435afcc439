// Notification Debouncer
//
// Suppresses repeats of the same notification within a time window.
//
// Example (1 s window, same method and message):
// - t=0.0s  sent
// - t=0.5s  suppressed (window now restarts from 0.5s)
// - t=1.2s  suppressed
// - t=2.3s  sent

use crate::types::NotificationMethod;
use std::collections::HashMap;
use std::time::{Duration, Instant};

pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(1000);

/// Ledger key for a notification; the title is deliberately not part of it
pub fn debounce_key(method: NotificationMethod, message: &str) -> String {
    format!("{}:{}", method, message)
}

/// Last attempt time per (method, message)
#[derive(Debug)]
pub struct DebounceLedger {
    window: Duration,
    last_attempt: HashMap<String, Instant>,
}

impl Default for DebounceLedger {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW)
    }
}

impl DebounceLedger {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_attempt: HashMap::new(),
        }
    }

    /// Record an attempt at `now` and report whether it may be sent
    ///
    /// Suppressed attempts also refresh the timestamp, so a steady stream of
    /// repeats stays suppressed until it pauses for a full window.
    pub fn should_send(&mut self, key: String, now: Instant) -> bool {
        match self.last_attempt.insert(key, now) {
            Some(last) => now.saturating_duration_since(last) >= self.window,
            None => true,
        }
    }
}
