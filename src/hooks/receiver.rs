// Hook Receiver
//
// Reads host hook invocations as newline-delimited JSON and routes them
// one at a time. Malformed lines, including invalid UTF-8, are counted and
// skipped; only a read error ends the loop early.

use super::router::{EventRouter, HostHook};
use crate::error::ReceiverError;
use std::io::Write;
use std::time::Instant;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Hook receiver statistics
#[derive(Debug)]
pub struct ReceiverStats {
    pub hooks_received: u64,
    /// Hooks that mapped to an event type, enabled or not
    pub events_mapped: u64,
    pub ignored: u64,
    pub parse_errors: u64,
    start_time: Instant,
}

impl ReceiverStats {
    fn new() -> Self {
        Self {
            hooks_received: 0,
            events_mapped: 0,
            ignored: 0,
            parse_errors: 0,
            start_time: Instant::now(),
        }
    }

    pub fn log_summary(&self) {
        tracing::info!(
            uptime_secs = self.start_time.elapsed().as_secs(),
            hooks_received = self.hooks_received,
            events_mapped = self.events_mapped,
            ignored = self.ignored,
            parse_errors = self.parse_errors,
            "hook receiver finished"
        );
    }
}

/// Run the receiver until the input reaches end of file
pub async fn run_receiver<R, W>(
    mut reader: R,
    router: &EventRouter<W>,
) -> Result<ReceiverStats, ReceiverError>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send,
{
    let mut stats = ReceiverStats::new();
    let mut line = Vec::new();

    tracing::debug!("hook receiver listening");

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            break;
        }

        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let hook = match serde_json::from_slice::<HostHook>(&line) {
            Ok(hook) => hook,
            Err(e) => {
                stats.parse_errors += 1;
                let shown = String::from_utf8_lossy(&line);
                tracing::warn!(error = %e, line = %shown.trim_end(), "skipping malformed hook");
                continue;
            }
        };

        stats.hooks_received += 1;
        match router.handle(&hook).await {
            Some(event) => {
                stats.events_mapped += 1;
                tracing::debug!(%event, "hook routed");
            }
            None => stats.ignored += 1,
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_and_merge, NotifierConfig};
    use crate::error::LookupError;
    use crate::notification::Dispatcher;
    use crate::session::{SessionInfo, SessionLookup};
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::io::BufReader;

    struct NoParent;

    #[async_trait]
    impl SessionLookup for NoParent {
        async fn get(&self, _session_id: &str) -> Result<SessionInfo, LookupError> {
            Ok(SessionInfo::default())
        }
    }

    fn make_router(raw_config: &str) -> EventRouter<Vec<u8>> {
        let config = load_and_merge(Some(raw_config), &NotifierConfig::default());
        EventRouter::new(config, Arc::new(NoParent), None, "", Dispatcher::new(Vec::new()))
    }

    #[tokio::test]
    async fn test_routes_hooks_in_order() {
        let router = make_router(r#"{"method":"osc777","events":{"complete":true}}"#);
        let input = concat!(
            r#"{"hook":"permission.ask"}"#,
            "\n\n",
            r#"{"hook":"event","event":{"type":"session.idle","#,
            r#""properties":{"sessionID":"ses_1"}}}"#,
            "\n",
            r#"{"hook":"event","event":{"type":"file.edited"}}"#,
            "\n",
        );

        let stats = run_receiver(BufReader::new(input.as_bytes()), &router).await.unwrap();
        assert_eq!(stats.hooks_received, 3);
        assert_eq!(stats.events_mapped, 2);
        assert_eq!(stats.ignored, 1);
        assert_eq!(stats.parse_errors, 0);

        let output = router.dispatcher().output().clone();
        assert_eq!(
            output,
            concat!(
                "\x1b]777;notify;OpenCode;Session needs permission\x1b\\",
                "\x1b]777;notify;OpenCode;Session has finished\x1b\\",
            )
            .as_bytes()
        );
    }

    #[tokio::test]
    async fn test_malformed_lines_are_skipped() {
        let router = make_router(r#"{"method":"bell"}"#);
        let input = concat!(
            "not json\n",
            r#"{"hook":"unknown"}"#,
            "\n",
            r#"{"hook":"event","event":{"type":"session.error"}}"#,
        );

        let stats = run_receiver(BufReader::new(input.as_bytes()), &router).await.unwrap();
        assert_eq!(stats.parse_errors, 2);
        assert_eq!(stats.hooks_received, 1);
        assert_eq!(router.dispatcher().output().as_slice(), b"\x07");
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_does_not_stop_receiver() {
        let router = make_router(r#"{"method":"bell"}"#);
        let input: &[u8] = b"\xff\xfe garbage\n{\"hook\":\"permission.ask\"}\n";

        let stats = run_receiver(BufReader::new(input), &router).await.unwrap();
        assert_eq!(stats.parse_errors, 1);
        assert_eq!(stats.hooks_received, 1);
        assert_eq!(router.dispatcher().output().as_slice(), b"\x07");
    }

    #[tokio::test]
    async fn test_disabled_event_still_counts_as_mapped() {
        let router = make_router("{}");
        let input = concat!(r#"{"hook":"event","event":{"type":"session.idle"}}"#, "\n");

        let stats = run_receiver(BufReader::new(input.as_bytes()), &router).await.unwrap();
        assert_eq!(stats.events_mapped, 1);
        assert!(router.dispatcher().output().is_empty());
    }

    #[tokio::test]
    async fn test_empty_input() {
        let router = make_router("{}");
        let stats = run_receiver(BufReader::new(&b""[..]), &router).await.unwrap();
        assert_eq!(stats.hooks_received, 0);
    }
}
