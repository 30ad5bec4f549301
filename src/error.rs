use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems with the settings file or the resulting values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("grid size {size} is out of range ({min}..={max})")]
    GridSize { size: u16, min: u16, max: u16 },

    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}

/// Top-level failure of the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
