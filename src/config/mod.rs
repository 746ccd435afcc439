// Config Module - User configuration
//
// Loads the notifier config file once at activation and merges it with
// the built-in defaults

pub mod loader;
pub mod settings;

// Re-export public API
pub use loader::{config_path, load_and_merge, load_config, load_config_from_path, CONFIG_FILE_NAME};
pub use settings::{EventSetting, EventSettings, Messages, NotifierConfig};
