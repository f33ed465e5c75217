//! Application configuration

use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

/// Tunables for the portal. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Shown in the sidebar header and the auth card footer
    pub brand: String,
    pub notification_timeout_ms: u64,
    /// Simulated account creation round trip
    pub register_delay_ms: u64,
    /// Pause between OTP verification and the jump to login
    pub otp_redirect_delay_ms: u64,
    /// `tracing` filter directive, e.g. `info` or `admin_portal=debug`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand: "Your Brand".to_string(),
            notification_timeout_ms: 6000,
            register_delay_ms: 1500,
            otp_redirect_delay_ms: 3000,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load config from file or create default
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            let config = Self::default();
            if let Err(e) = config.save() {
                eprintln!("Failed to write default config: {e}");
            }
            return config;
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => return config,
                Err(e) => eprintln!("Failed to parse config: {e}"),
            },
            Err(e) => eprintln!("Failed to read config: {e}"),
        }

        Self::default()
    }

    /// The browser build has no config file
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }

    pub fn parse(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Save config to file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, contents)?;

        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_default())
            .join("AdminPortal")
            .join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_timings() {
        let config = AppConfig::default();
        assert_eq!(config.notification_timeout_ms, 6000);
        assert_eq!(config.register_delay_ms, 1500);
        assert_eq!(config.otp_redirect_delay_ms, 3000);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = AppConfig::parse(r#"{ "brand": "Acme", "register_delay_ms": 0 }"#).unwrap();
        assert_eq!(config.brand, "Acme");
        assert_eq!(config.register_delay_ms, 0);
        assert_eq!(config.notification_timeout_ms, 6000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(AppConfig::parse(r#"{ "notification_timeout_ms": "soon" }"#).is_err());
    }
}
