// Notifier Settings
//
// Fully resolved configuration. After loading, every event has both a
// setting and a message; nothing is optional at use sites.

use crate::types::{EventType, MethodSelector, NotificationMethod};
use serde::{Serialize, Serializer};

/// Per-event setting, resolved once from the boolean-or-object config shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSetting {
    Disabled,
    /// Enabled, inheriting the global method
    EnabledDefault,
    EnabledWithMethod(MethodSelector),
}

impl EventSetting {
    pub fn from_enabled(enabled: bool) -> Self {
        Self::from_parts(enabled, None)
    }

    pub fn from_parts(enabled: bool, method: Option<MethodSelector>) -> Self {
        match (enabled, method) {
            (false, _) => EventSetting::Disabled,
            (true, None) => EventSetting::EnabledDefault,
            (true, Some(method)) => EventSetting::EnabledWithMethod(method),
        }
    }

    pub fn is_enabled(self) -> bool {
        !matches!(self, EventSetting::Disabled)
    }

    /// Method override, if this event has one
    pub fn method(self) -> Option<MethodSelector> {
        match self {
            EventSetting::EnabledWithMethod(method) => Some(method),
            _ => None,
        }
    }
}

// Serialized in the same `{enabled, method?}` shape the config file accepts
impl Serialize for EventSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct EventConfig {
            enabled: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            method: Option<MethodSelector>,
        }

        EventConfig {
            enabled: self.is_enabled(),
            method: self.method(),
        }
        .serialize(serializer)
    }
}

/// Settings for each event type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSettings {
    pub permission: EventSetting,
    pub complete: EventSetting,
    pub subagent_complete: EventSetting,
    pub error: EventSetting,
    pub question: EventSetting,
}

impl EventSettings {
    /// Build every entry from a fallible per-event function
    pub fn try_from_fn<E>(
        mut f: impl FnMut(EventType) -> Result<EventSetting, E>,
    ) -> Result<Self, E> {
        Ok(Self {
            permission: f(EventType::Permission)?,
            complete: f(EventType::Complete)?,
            subagent_complete: f(EventType::SubagentComplete)?,
            error: f(EventType::Error)?,
            question: f(EventType::Question)?,
        })
    }

    pub fn get(&self, event: EventType) -> EventSetting {
        match event {
            EventType::Permission => self.permission,
            EventType::Complete => self.complete,
            EventType::SubagentComplete => self.subagent_complete,
            EventType::Error => self.error,
            EventType::Question => self.question,
        }
    }
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            permission: EventSetting::EnabledDefault,
            complete: EventSetting::Disabled,
            subagent_complete: EventSetting::Disabled,
            error: EventSetting::EnabledDefault,
            question: EventSetting::EnabledDefault,
        }
    }
}

/// Notification body for each event type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Messages {
    pub permission: String,
    pub complete: String,
    pub subagent_complete: String,
    pub error: String,
    pub question: String,
}

impl Messages {
    pub fn from_fn(mut f: impl FnMut(EventType) -> String) -> Self {
        Self {
            permission: f(EventType::Permission),
            complete: f(EventType::Complete),
            subagent_complete: f(EventType::SubagentComplete),
            error: f(EventType::Error),
            question: f(EventType::Question),
        }
    }

    pub fn get(&self, event: EventType) -> &str {
        match event {
            EventType::Permission => &self.permission,
            EventType::Complete => &self.complete,
            EventType::SubagentComplete => &self.subagent_complete,
            EventType::Error => &self.error,
            EventType::Question => &self.question,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            permission: "Session needs permission".to_string(),
            complete: "Session has finished".to_string(),
            subagent_complete: "Subagent task completed".to_string(),
            error: "Session encountered an error".to_string(),
            question: "Session has a question".to_string(),
        }
    }
}

/// Resolved notifier configuration, immutable after load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifierConfig {
    pub enabled: bool,
    pub method: MethodSelector,
    pub show_project_name: bool,
    pub events: EventSettings,
    pub messages: Messages,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            method: MethodSelector::Auto,
            show_project_name: true,
            events: EventSettings::default(),
            messages: Messages::default(),
        }
    }
}

impl NotifierConfig {
    pub fn is_event_enabled(&self, event: EventType) -> bool {
        self.events.get(event).is_enabled()
    }

    /// Concrete method for an event: its override, else the global method
    pub fn event_method(&self, event: EventType, terminal_identity: &str) -> NotificationMethod {
        self.events
            .get(event)
            .method()
            .unwrap_or(self.method)
            .resolve(terminal_identity)
    }

    pub fn message(&self, event: EventType) -> &str {
        self.messages.get(event)
    }
}
