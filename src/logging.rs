//! File-based tracing setup.
//!
//! The TUI owns the alternate screen, so log output goes to a file under the
//! user data directory instead of stderr. Logging is disabled unless
//! `CAREERBRIDGE_LOG` is set; the variable takes standard `EnvFilter` syntax
//! (e.g. `CAREERBRIDGE_LOG=careerbridge=debug`).

use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::error::{CareerBridgeError, Result};

/// Directory name under the platform data dir where the log file lives.
const LOG_DIR: &str = "careerbridge";

/// Resolve the path of the log file, creating parent directories as needed.
fn log_file_path() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR);
    std::fs::create_dir_all(&dir)
        .map_err(|e| CareerBridgeError::LogInit(format!("{}: {}", dir.display(), e)))?;
    Ok(dir.join("careerbridge.log"))
}

/// Initialize the global tracing subscriber.
///
/// A no-op when `CAREERBRIDGE_LOG` is unset or empty, so a plain run never
/// touches the filesystem.
pub fn init() -> Result<()> {
    let filter = match std::env::var("CAREERBRIDGE_LOG") {
        Ok(spec) if !spec.is_empty() => EnvFilter::new(spec),
        _ => return Ok(()),
    };

    let path = log_file_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| CareerBridgeError::LogInit(format!("{}: {}", path.display(), e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .init();

    tracing::info!("logging initialized at {}", path.display());
    Ok(())
}
