// Hooks Module - Host hook handling
//
// This module receives OpenCode plugin hooks and routes them to notifications

pub mod receiver;
pub mod router;

pub use receiver::{run_receiver, ReceiverStats};
pub use router::{notification_title, BusEvent, EventRouter, HostHook, ToolInput};
