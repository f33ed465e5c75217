//! Logging setup

use crate::config::AppConfig;

/// Keeps the background log writer alive; drop it to flush
#[cfg(not(target_arch = "wasm32"))]
pub type LogGuard = tracing_appender::non_blocking::WorkerGuard;
#[cfg(target_arch = "wasm32")]
pub type LogGuard = ();

/// Initialize tracing with both console and file output
#[cfg(not(target_arch = "wasm32"))]
pub fn init_diagnostics(config: &AppConfig) -> LogGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default())
        .join("AdminPortal")
        .join("logs");

    if !log_dir.exists() {
        let _ = std::fs::create_dir_all(&log_dir);
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::daily(&log_dir, "admin-portal.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    tracing::info!("Diagnostics initialized. Logs: {:?}", log_dir);

    guard
}

/// Route `tracing` to the browser console
#[cfg(target_arch = "wasm32")]
pub fn init_diagnostics(config: &AppConfig) -> LogGuard {
    let level = config
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);

    // fails only if the renderer already installed one
    let _ = dioxus::logger::init(level);
}
