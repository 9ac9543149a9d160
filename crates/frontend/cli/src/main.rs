//! Terminal client entry point.
mod app;
mod config;
mod content;
mod input;
mod presentation;
mod state;

use anyhow::Result;
use app::App;
use config::CliConfig;
use satchel_frontend_core::FrontendConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = init_logging()?;

    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    App::new(frontend_config, cli_config)?.run()
}

/// File-based logging: the TUI owns the terminal, so log lines go to a
/// rolling file under the platform data directory (`RUST_LOG` filters).
fn init_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = directories::ProjectDirs::from("", "", "satchel")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("satchel-logs"));
    std::fs::create_dir_all(&log_dir)?;

    let appender = tracing_appender::rolling::daily(log_dir, "satchel.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
