//! Log output setup
//!
//! The terminal belongs to the TUI, so log records go to a file. The level
//! comes from `RUST_LOG` and defaults to `info`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::Result;

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Installs the global subscriber.
///
/// With `None` every record is discarded. If the log file cannot be opened
/// records are discarded as well and the open error is returned, so the
/// caller can warn and carry on. Calling this twice keeps the first
/// subscriber.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file, outcome) = match log_file.map(open_log_file).transpose() {
        Ok(file) => (file, Ok(())),
        Err(e) => (None, Err(e)),
    };

    let installed = match file {
        Some(file) => fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        None => fmt().with_env_filter(filter).with_writer(io::sink).try_init(),
    };

    if installed.is_err() {
        tracing::debug!("Log subscriber already installed");
    }
    outcome
}
