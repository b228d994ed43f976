use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::errors::CliError;

/// Console logging filtered by `RUST_LOG` (default `info`), plus a daily
/// rolling file when a log directory is given.
pub fn init_logging(log_dir: Option<&Path>) -> Result<(), CliError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    macro_rules! console_layer {
        () => {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(false)
        };
    }

    if let Some(log_dir) = log_dir {
        if !log_dir.exists() {
            std::fs::create_dir_all(log_dir)
                .map_err(|e| CliError::LogDirectory(format!("{}: {e}", log_dir.display())))?;
        }

        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "tss-tracker.log");
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true);

        registry.with(file_layer).with(console_layer!()).init();
        tracing::info!("Logging initialized with file output: {}", log_dir.display());
    } else {
        registry.with(console_layer!()).init();
        tracing::debug!("Logging initialized with console output only");
    }

    Ok(())
}
