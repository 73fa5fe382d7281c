use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{resolve_path, LoggingConfig};

/// Initialize logging: stderr plus an optional file
///
/// `RUST_LOG` takes precedence over the configured filter. Stdout stays free
/// for the report itself.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.filter.clone());

    let file_layer = match &config.file {
        Some(path) => {
            let log_file_path = resolve_path(path);
            if let Some(log_dir) = log_file_path.parent() {
                std::fs::create_dir_all(log_dir)?;
            }
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file_path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Arc::new(log_file))
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()?;

    Ok(())
}
