// Config Loader
//
// Reads ~/.config/opencode/terminal-notifier.json and merges it over the
// defaults. Loading never fails: a missing file or any merge error yields
// the defaults unchanged, never a partially applied config.

use super::settings::{EventSetting, EventSettings, Messages, NotifierConfig};
use crate::error::{json_kind, ConfigError};
use crate::types::{EventType, MethodSelector};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "terminal-notifier.json";

/// Get the user config file path
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join("opencode")
            .join(CONFIG_FILE_NAME)
    })
}

/// Load the user config from the default path
pub fn load_config() -> NotifierConfig {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => {
            tracing::debug!("home directory unknown, using default config");
            NotifierConfig::default()
        }
    }
}

/// Load the user config from a specific path
pub fn load_config_from_path(path: &Path) -> NotifierConfig {
    let defaults = NotifierConfig::default();

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return defaults;
    }

    match fs::read_to_string(path) {
        Ok(contents) => {
            tracing::debug!(?path, "loading config file");
            load_and_merge(Some(&contents), &defaults)
        }
        Err(e) => {
            let err = ConfigError::from(e);
            tracing::warn!(?path, error = %err, "ignoring unreadable config, using defaults");
            defaults
        }
    }
}

/// Merge raw user JSON over `defaults`, falling back to `defaults` on any error
pub fn load_and_merge(raw_user_config: Option<&str>, defaults: &NotifierConfig) -> NotifierConfig {
    let Some(raw) = raw_user_config else {
        return defaults.clone();
    };

    match parse_and_merge(raw, defaults) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring invalid config, using defaults");
            defaults.clone()
        }
    }
}

pub fn parse_and_merge(
    raw: &str,
    defaults: &NotifierConfig,
) -> Result<NotifierConfig, ConfigError> {
    let user: Value = serde_json::from_str(raw)?;
    merge_value(&user, defaults)
}

/// Merge an already parsed user config over `defaults`
///
/// Scalars with the wrong type or an unknown method name fall back to the
/// default value. Events missing from the user config get a computed
/// default: the resolved global `enabled`, except `subagent_complete`,
/// which stays opt-in.
///
/// A `null` root is an error. Any other non-object root has no fields, so
/// every value comes from `defaults` or the computed event defaults.
pub fn merge_value(
    user: &Value,
    defaults: &NotifierConfig,
) -> Result<NotifierConfig, ConfigError> {
    let no_fields = Map::new();
    let user = match user {
        Value::Object(fields) => fields,
        Value::Null => return Err(ConfigError::NullRoot),
        other => {
            tracing::debug!(kind = json_kind(other), "config root is not an object");
            &no_fields
        }
    };

    let enabled = user
        .get("enabled")
        .and_then(Value::as_bool)
        .unwrap_or(defaults.enabled);
    let method = user
        .get("method")
        .and_then(parse_method)
        .unwrap_or(defaults.method);
    let show_project_name = user
        .get("showProjectName")
        .and_then(Value::as_bool)
        .unwrap_or(defaults.show_project_name);

    let user_events = user.get("events").and_then(Value::as_object);
    let events = EventSettings::try_from_fn(|event| {
        let default = match event {
            EventType::SubagentComplete => EventSetting::Disabled,
            _ => EventSetting::from_enabled(enabled),
        };
        parse_event(user_events, event, default)
    })?;

    let user_messages = user.get("messages").and_then(Value::as_object);
    let messages = Messages::from_fn(|event| {
        user_messages
            .and_then(|messages| messages.get(event.as_str()))
            .and_then(Value::as_str)
            .unwrap_or_else(|| defaults.messages.get(event))
            .to_string()
    });

    Ok(NotifierConfig {
        enabled,
        method,
        show_project_name,
        events,
        messages,
    })
}

fn parse_method(value: &Value) -> Option<MethodSelector> {
    value.as_str().and_then(MethodSelector::parse)
}

/// Accepts `true`/`false` shorthand or `{enabled?, method?}`
fn parse_event(
    user_events: Option<&Map<String, Value>>,
    event: EventType,
    default: EventSetting,
) -> Result<EventSetting, ConfigError> {
    let Some(value) = user_events.and_then(|events| events.get(event.as_str())) else {
        return Ok(default);
    };

    let setting = match value {
        Value::Null => return Err(ConfigError::NullEvent(event.as_str())),
        Value::Bool(enabled) => EventSetting::from_enabled(*enabled),
        Value::Object(fields) => {
            let enabled = fields
                .get("enabled")
                .and_then(Value::as_bool)
                .unwrap_or(default.is_enabled());
            let method = fields.get("method").and_then(parse_method);
            EventSetting::from_parts(enabled, method)
        }
        // Strings, numbers and arrays carry no usable fields
        _ => EventSetting::from_enabled(default.is_enabled()),
    };

    Ok(setting)
}
