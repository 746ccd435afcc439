// Terminal Detection
//
// Maps the terminal identity (TERM_PROGRAM) to the richest notification
// protocol the terminal is known to support:
// - OSC 99 (title + body): kitty, WezTerm, foot
// - OSC 777 (title + body): Ghostty
// - OSC 9 (single message): iTerm2
// - Bell: everything else

use crate::types::NotificationMethod;
use once_cell::sync::OnceCell;

/// Environment variable carrying the terminal identity
pub const TERM_PROGRAM_VAR: &str = "TERM_PROGRAM";

static TERMINAL_IDENTITY: OnceCell<String> = OnceCell::new();

/// Terminal identity for this process, read from the environment once
///
/// An unset or non-UTF-8 variable yields an empty string.
pub fn current_identity() -> &'static str {
    TERMINAL_IDENTITY.get_or_init(|| {
        let identity = std::env::var(TERM_PROGRAM_VAR).unwrap_or_default();
        tracing::debug!(terminal = %identity, "detected terminal identity");
        identity
    })
}

/// Resolve `auto` to a concrete method for the given terminal identity
pub fn resolve_auto_method(terminal_identity: &str) -> NotificationMethod {
    let identity = terminal_identity.to_lowercase();

    match identity.as_str() {
        "kitty" | "wezterm" | "foot" => NotificationMethod::Osc99,
        // Ghostty also speaks OSC 9, but OSC 777 keeps title and body apart
        "ghostty" => NotificationMethod::Osc777,
        "iterm.app" => NotificationMethod::Osc9,
        _ => NotificationMethod::Bell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_terminals() {
        assert_eq!(resolve_auto_method("kitty"), NotificationMethod::Osc99);
        assert_eq!(resolve_auto_method("wezterm"), NotificationMethod::Osc99);
        assert_eq!(resolve_auto_method("foot"), NotificationMethod::Osc99);
        assert_eq!(resolve_auto_method("ghostty"), NotificationMethod::Osc777);
        assert_eq!(resolve_auto_method("iTerm.app"), NotificationMethod::Osc9);
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(resolve_auto_method("WezTerm"), NotificationMethod::Osc99);
        assert_eq!(resolve_auto_method("GHOSTTY"), NotificationMethod::Osc777);
        assert_eq!(resolve_auto_method("ITERM.APP"), NotificationMethod::Osc9);
    }

    #[test]
    fn test_unknown_terminals_fall_back_to_bell() {
        for identity in ["", "Apple_Terminal", "alacritty", "vscode", "iterm", " kitty", "tmux"] {
            assert_eq!(resolve_auto_method(identity), NotificationMethod::Bell, "{identity:?}");
        }
    }

    #[test]
    fn test_current_identity_is_stable() {
        let first = current_identity();
        let second = current_identity();
        assert!(std::ptr::eq(first, second));
    }
}
