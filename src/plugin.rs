// Plugin Activation
//
// Builds the event router once per activation. When notifications are
// globally disabled no router is installed and every hook is a no-op.

use crate::config::NotifierConfig;
use crate::hooks::EventRouter;
use crate::notification::Dispatcher;
use crate::session::SessionLookup;
use crate::terminal;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Project name shown in notification titles: the last component of the working directory
pub fn project_name(directory: Option<&Path>) -> Option<String> {
    directory?
        .file_name()?
        .to_str()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// Activate the notifier for a host session
pub fn activate<W: Write + Send>(
    config: NotifierConfig,
    lookup: Arc<dyn SessionLookup>,
    directory: Option<&Path>,
    output: W,
) -> Option<EventRouter<W>> {
    activate_with_terminal(config, lookup, directory, terminal::current_identity(), output)
}

pub fn activate_with_terminal<W: Write + Send>(
    config: NotifierConfig,
    lookup: Arc<dyn SessionLookup>,
    directory: Option<&Path>,
    terminal_identity: &str,
    output: W,
) -> Option<EventRouter<W>> {
    if !config.enabled {
        tracing::info!("notifications disabled, hooks not installed");
        return None;
    }

    let project = project_name(directory);
    tracing::debug!(
        project = ?project,
        terminal = terminal_identity,
        method = ?config.method,
        "notifier activated"
    );

    Some(EventRouter::new(
        config,
        lookup,
        project,
        terminal_identity,
        Dispatcher::new(output),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_and_merge;
    use crate::error::LookupError;
    use crate::hooks::HostHook;
    use crate::session::SessionInfo;
    use async_trait::async_trait;
    use std::path::PathBuf;

    struct Unreachable;

    #[async_trait]
    impl SessionLookup for Unreachable {
        async fn get(&self, _session_id: &str) -> Result<SessionInfo, LookupError> {
            Err(LookupError::Status(503))
        }
    }

    #[test]
    fn test_project_name_from_directory() {
        let dir = PathBuf::from("/home/dev/projects/my-app");
        assert_eq!(project_name(Some(dir.as_path())), Some("my-app".to_string()));
        assert_eq!(project_name(Some(Path::new("/"))), None);
        assert_eq!(project_name(None), None);
    }

    #[test]
    fn test_disabled_config_installs_nothing() {
        let config = load_and_merge(Some(r#"{"enabled": false}"#), &NotifierConfig::default());
        let router =
            activate_with_terminal(config, Arc::new(Unreachable), None, "kitty", Vec::<u8>::new());
        assert!(router.is_none());
    }

    #[tokio::test]
    async fn test_title_includes_project() {
        let dir = PathBuf::from("/work/api-server");
        let router = activate_with_terminal(
            NotifierConfig::default(),
            Arc::new(Unreachable),
            Some(dir.as_path()),
            "WezTerm",
            Vec::<u8>::new(),
        )
        .unwrap();

        router.handle(&HostHook::PermissionAsk).await;
        assert_eq!(
            router.dispatcher().output().as_slice(),
            b"\x1b]99;d=0;OpenCode (api-server) - Session needs permission\x1b\\"
        );
    }
}
