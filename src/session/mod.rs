// Session Module - Host session lookups
//
// Determines whether a finished session was a subagent session

pub mod classifier;
pub mod client;

pub use classifier::{is_child_session, SessionInfo, SessionLookup};
pub use client::{HttpSessionLookup, DEFAULT_SERVER_URL};
