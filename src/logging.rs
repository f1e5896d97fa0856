//! Tracing setup
//!
//! The TUI owns the terminal, so logs go to a file in the data directory.
//! When that directory cannot be created the subscriber falls back to stderr.

use directories::ProjectDirs;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "lead_form_tui=info";
const LOG_FILE: &str = "lead-form-tui.log";

/// Location of the log file, if the platform has a data directory
pub fn log_path() -> Option<PathBuf> {
    ProjectDirs::from("ai", "legartis", "lead-form-tui")
        .map(|dirs| dirs.data_local_dir().join(LOG_FILE))
}

fn open_log_file() -> io::Result<(File, PathBuf)> {
    let path = log_path().ok_or_else(|| io::Error::other("no data directory"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Install the global subscriber; returns the log file path when logging to a file
pub fn init() -> Option<PathBuf> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    match open_log_file() {
        Ok((file, path)) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
            Some(path)
        }
        Err(_) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .init();
            None
        }
    }
}
