// Terminal Notifier Type Definitions
//
// Shared enums used by the config, routing and notification modules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle event kinds that can produce a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Permission,
    Complete,
    SubagentComplete,
    Error,
    Question,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::Permission,
        EventType::Complete,
        EventType::SubagentComplete,
        EventType::Error,
        EventType::Question,
    ];

    /// Key used for this event in the config file
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Permission => "permission",
            EventType::Complete => "complete",
            EventType::SubagentComplete => "subagent_complete",
            EventType::Error => "error",
            EventType::Question => "question",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.as_str() == value)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification method as written in configuration (may be `auto`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodSelector {
    Bell,
    Osc9,
    Osc777,
    Osc99,
    Auto,
}

impl MethodSelector {
    /// Parse against the closed set of method names; anything else is invalid
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bell" => Some(MethodSelector::Bell),
            "osc9" => Some(MethodSelector::Osc9),
            "osc777" => Some(MethodSelector::Osc777),
            "osc99" => Some(MethodSelector::Osc99),
            "auto" => Some(MethodSelector::Auto),
            _ => None,
        }
    }

    /// Resolve to a concrete method, using `terminal_identity` for `auto`
    pub fn resolve(self, terminal_identity: &str) -> NotificationMethod {
        match self {
            MethodSelector::Bell => NotificationMethod::Bell,
            MethodSelector::Osc9 => NotificationMethod::Osc9,
            MethodSelector::Osc777 => NotificationMethod::Osc777,
            MethodSelector::Osc99 => NotificationMethod::Osc99,
            MethodSelector::Auto => crate::terminal::resolve_auto_method(terminal_identity),
        }
    }
}

/// Concrete notification protocol handed to the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationMethod {
    Bell,
    Osc9,
    Osc777,
    Osc99,
}

impl NotificationMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationMethod::Bell => "bell",
            NotificationMethod::Osc9 => "osc9",
            NotificationMethod::Osc777 => "osc777",
            NotificationMethod::Osc99 => "osc99",
        }
    }
}

impl fmt::Display for NotificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_keys() {
        let keys: Vec<&str> = EventType::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(keys, ["permission", "complete", "subagent_complete", "error", "question"]);
        assert_eq!(EventType::parse("subagent_complete"), Some(EventType::SubagentComplete));
        assert_eq!(EventType::parse("Complete"), None);
    }

    #[test]
    fn test_method_selector_parse_is_closed() {
        assert_eq!(MethodSelector::parse("osc777"), Some(MethodSelector::Osc777));
        assert_eq!(MethodSelector::parse("auto"), Some(MethodSelector::Auto));
        assert_eq!(MethodSelector::parse("BELL"), None);
        assert_eq!(MethodSelector::parse("osc52"), None);
    }

    #[test]
    fn test_explicit_selector_ignores_terminal() {
        assert_eq!(MethodSelector::Osc9.resolve("kitty"), NotificationMethod::Osc9);
        assert_eq!(MethodSelector::Auto.resolve("kitty"), NotificationMethod::Osc99);
    }
}
