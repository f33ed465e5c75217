//! Process-wide state set up before the UI launches

use crate::config::AppConfig;
use std::sync::OnceLock;

/// Config loaded in `main`, read once by the root component
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Store the startup config. Later calls are ignored.
pub fn install_config(config: AppConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Config already installed, keeping the first one");
    }
}

/// The startup config, or defaults if `main` never installed one
pub fn config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}
