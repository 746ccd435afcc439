// Session HTTP Client
//
// SessionLookup backed by the OpenCode server API (GET /session/{id})

use super::classifier::{SessionInfo, SessionLookup};
use crate::error::LookupError;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:4096";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub struct HttpSessionLookup {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpSessionLookup {
    pub fn new(base_url: &str) -> Result<Self, LookupError> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| LookupError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Session endpoint with the id encoded as a single path segment
    pub fn session_url(&self, session_id: &str) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| LookupError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("session")
            .push(session_id);
        Ok(url)
    }
}

#[async_trait]
impl SessionLookup for HttpSessionLookup {
    async fn get(&self, session_id: &str) -> Result<SessionInfo, LookupError> {
        let url = self.session_url(session_id)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| LookupError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_url_trims_trailing_slash() {
        let lookup = HttpSessionLookup::new("http://localhost:4096/").unwrap();
        let url = lookup.session_url("ses_abc").unwrap();
        assert_eq!(url.as_str(), "http://localhost:4096/session/ses_abc");
    }

    #[test]
    fn test_session_url_keeps_base_path() {
        let lookup = HttpSessionLookup::new("http://localhost:4096/api").unwrap();
        let url = lookup.session_url("ses_abc").unwrap();
        assert_eq!(url.as_str(), "http://localhost:4096/api/session/ses_abc");
    }

    #[test]
    fn test_session_id_is_one_encoded_segment() {
        let lookup = HttpSessionLookup::new(DEFAULT_SERVER_URL).unwrap();
        let url = lookup.session_url("a/b?c#d").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:4096/session/a%2Fb%3Fc%23d");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = HttpSessionLookup::new("not a url").err().unwrap();
        assert!(matches!(err, LookupError::InvalidUrl(_)));

        let err = HttpSessionLookup::new("mailto:dev@example.com").err().unwrap();
        assert!(matches!(err, LookupError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_error() {
        // Port 9 (discard) is closed on test machines; the request fails fast
        let timeout = Duration::from_millis(500);
        let lookup = HttpSessionLookup::with_timeout("http://127.0.0.1:9", timeout).unwrap();
        assert!(lookup.get("ses_1").await.is_err());
    }
}
