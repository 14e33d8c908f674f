mod service;

pub use service::{default_config_path, SettingsService, CONFIG_FILE_NAME};
