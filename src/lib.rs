// Terminal Notifier
//
// Terminal notifications for OpenCode lifecycle events: permission
// requests, completed sessions and subagents, errors and questions are
// signalled with a bell or an OSC 9/777/99 desktop notification.

pub mod config;
pub mod error;
pub mod hooks;
pub mod notification;
pub mod plugin;
pub mod session;
pub mod terminal;
pub mod types;

pub use config::NotifierConfig;
pub use error::{ConfigError, LookupError, ReceiverError};
pub use hooks::{EventRouter, HostHook};
pub use notification::Dispatcher;
pub use plugin::{activate, project_name};
pub use session::{SessionInfo, SessionLookup};
pub use types::{EventType, MethodSelector, NotificationMethod};
