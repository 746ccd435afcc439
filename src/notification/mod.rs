// Notification Module - Terminal notification output
//
// Encodes bell/OSC notifications and writes them with per-message debouncing

pub mod debouncer;
pub mod escape;
pub mod sender;

// Re-export public API
pub use debouncer::{debounce_key, DebounceLedger, DEBOUNCE_WINDOW};
pub use sender::Dispatcher;
