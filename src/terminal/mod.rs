// Terminal Module - Terminal capability detection
//
// Picks a concrete notification protocol for the `auto` method

pub mod detect;

pub use detect::{current_identity, resolve_auto_method, TERM_PROGRAM_VAR};
