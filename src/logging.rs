//! Logging setup on top of `tracing-subscriber`.
//!
//! `RUST_LOG` takes precedence over the `-v` count. The interactive browser
//! owns the terminal, so there logs only go to a file, if one was given.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{FolioError, Result};

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    /// When set, logs are appended to this file.
    pub log_file: Option<PathBuf>,
    /// Fall back to stderr when no file is given.
    pub to_stderr: bool,
}

impl LogConfig {
    /// - 0 (no `-v`): warn
    /// - 1: info
    /// - 2: debug
    /// - 3+: trace
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            log_file: None,
            to_stderr: true,
        }
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    pub fn with_stderr(mut self, enabled: bool) -> Self {
        self.to_stderr = enabled;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.as_str().to_ascii_lowercase()))
    }
}

/// Install the global subscriber. Does nothing when neither a file nor stderr
/// is wanted.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    let result = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .try_init()
        }
        None if config.to_stderr => registry
            .with(fmt::layer().with_writer(io::stderr).with_target(false))
            .try_init(),
        None => return Ok(()),
    };

    result.map_err(|e| FolioError::Logging(e.to_string()))
}
