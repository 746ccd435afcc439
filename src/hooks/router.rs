// Event Router
//
// Maps host hook invocations to notification event types and dispatches
// them. Session idle events are split into `complete` and
// `subagent_complete` by asking the host whether the session has a parent.

use crate::config::NotifierConfig;
use crate::notification::Dispatcher;
use crate::session::{is_child_session, SessionLookup};
use crate::types::EventType;
use serde::Deserialize;
use serde_json::Value;
use std::io::Write;
use std::sync::Arc;

const QUESTION_TOOL: &str = "question";

/// A hook invocation from the host plugin framework
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "hook")]
pub enum HostHook {
    /// Generic event stream
    #[serde(rename = "event")]
    Event { event: BusEvent },
    #[serde(rename = "permission.ask")]
    PermissionAsk,
    #[serde(rename = "tool.execute.before")]
    ToolExecuteBefore {
        #[serde(default)]
        input: ToolInput,
    },
}

/// Typed payload on the host event stream
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BusEvent {
    #[serde(rename = "permission.updated")]
    PermissionUpdated,
    #[serde(rename = "permission.asked")]
    PermissionAsked,
    #[serde(rename = "session.idle")]
    SessionIdle {
        #[serde(default)]
        properties: Value,
    },
    #[serde(rename = "session.error")]
    SessionError,
    #[serde(other)]
    Other,
}

impl BusEvent {
    /// Session ID of a `session.idle` event, if it carries a non-empty one
    pub fn session_id(&self) -> Option<&str> {
        match self {
            BusEvent::SessionIdle { properties } => properties
                .get("sessionID")
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    pub tool: String,
}

/// Notification title, with the project name when enabled and known
pub fn notification_title(config: &NotifierConfig, project_name: Option<&str>) -> String {
    match project_name {
        Some(name) if config.show_project_name && !name.is_empty() => {
            format!("OpenCode ({})", name)
        }
        _ => "OpenCode".to_string(),
    }
}

pub struct EventRouter<W> {
    config: NotifierConfig,
    lookup: Arc<dyn SessionLookup>,
    project_name: Option<String>,
    terminal_identity: String,
    dispatcher: Dispatcher<W>,
}

impl<W: Write + Send> EventRouter<W> {
    pub fn new(
        config: NotifierConfig,
        lookup: Arc<dyn SessionLookup>,
        project_name: Option<String>,
        terminal_identity: impl Into<String>,
        dispatcher: Dispatcher<W>,
    ) -> Self {
        Self {
            config,
            lookup,
            project_name,
            terminal_identity: terminal_identity.into(),
            dispatcher,
        }
    }

    /// Route one hook invocation, returning the event type it mapped to
    pub async fn handle(&self, hook: &HostHook) -> Option<EventType> {
        let event = self.classify(hook).await?;
        self.notify(event);
        Some(event)
    }

    pub async fn classify(&self, hook: &HostHook) -> Option<EventType> {
        match hook {
            HostHook::PermissionAsk => Some(EventType::Permission),
            HostHook::ToolExecuteBefore { input } if input.tool == QUESTION_TOOL => {
                Some(EventType::Question)
            }
            HostHook::ToolExecuteBefore { .. } => None,
            HostHook::Event { event } => match event {
                BusEvent::PermissionUpdated | BusEvent::PermissionAsked => {
                    Some(EventType::Permission)
                }
                BusEvent::SessionError => Some(EventType::Error),
                BusEvent::SessionIdle { .. } => Some(self.classify_idle(event).await),
                BusEvent::Other => None,
            },
        }
    }

    async fn classify_idle(&self, event: &BusEvent) -> EventType {
        let Some(session_id) = event.session_id() else {
            return EventType::Complete;
        };

        if is_child_session(self.lookup.as_ref(), session_id).await {
            EventType::SubagentComplete
        } else {
            EventType::Complete
        }
    }

    /// Notify for `event` if it is enabled; returns true if a notification was written
    pub fn notify(&self, event: EventType) -> bool {
        if !self.config.is_event_enabled(event) {
            tracing::debug!(%event, "event disabled, skipping notification");
            return false;
        }
        self.send(event)
    }

    /// Notify for `event` regardless of whether it is enabled
    pub fn send(&self, event: EventType) -> bool {
        let title = notification_title(&self.config, self.project_name.as_deref());
        let method = self.config.event_method(event, &self.terminal_identity);
        self.dispatcher.dispatch(method, &title, self.config.message(event))
    }

    pub fn dispatcher(&self) -> &Dispatcher<W> {
        &self.dispatcher
    }
}
