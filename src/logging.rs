use crate::config::Config;
use color_eyre::Result;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to the log file, since the terminal belongs to the UI.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &Config) -> Result<()> {
    let path = config.log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|error| color_eyre::eyre::eyre!("Failed to install logger: {}", error))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}
