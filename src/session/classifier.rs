// Session Classifier
//
// Tells subagent (child) sessions apart from top-level sessions by asking
// the host for the session record and checking its parent ID

use crate::error::LookupError;
use async_trait::async_trait;
use serde::Deserialize;

/// Session record returned by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionInfo {
    #[serde(rename = "parentID", default)]
    pub parent_id: Option<String>,
}

impl SessionInfo {
    pub fn has_parent(&self) -> bool {
        self.parent_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// Host capability for looking up a session by ID
#[async_trait]
pub trait SessionLookup: Send + Sync {
    async fn get(&self, session_id: &str) -> Result<SessionInfo, LookupError>;
}

/// Check whether `session_id` is a child session
///
/// Lookup failures classify the session as top-level.
pub async fn is_child_session(lookup: &dyn SessionLookup, session_id: &str) -> bool {
    match lookup.get(session_id).await {
        Ok(info) => info.has_parent(),
        Err(e) => {
            tracing::debug!(
                session = session_id,
                error = %e,
                "session lookup failed, treating as top-level"
            );
            false
        }
    }
}
