// Error Types
//
// Every fallible step has a named error kind. Callers on the notification
// path log these and fall back instead of propagating them to the host.

use thiserror::Error;

/// Errors while reading or merging the user config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config root is null")]
    NullRoot,

    #[error("event '{0}' is null")]
    NullEvent(&'static str),
}

/// Errors from the host session lookup
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("session request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("session request returned status {0}")]
    Status(u16),

    #[error("malformed session response: {0}")]
    Malformed(String),

    #[error("invalid server URL: {0}")]
    InvalidUrl(String),
}

/// Errors that end the hook receiver loop
#[derive(Debug, Error)]
pub enum ReceiverError {
    #[error("failed to read hook input: {0}")]
    Read(#[from] std::io::Error),
}

/// Name of a JSON value's type, for error messages
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        assert_eq!(ConfigError::NullRoot.to_string(), "config root is null");

        let err = ConfigError::NullEvent("complete");
        assert_eq!(err.to_string(), "event 'complete' is null");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad}").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().contains("parse config JSON"));
    }

    #[test]
    fn test_lookup_status_display() {
        let err = LookupError::Status(404);
        assert_eq!(err.to_string(), "session request returned status 404");
    }
}
