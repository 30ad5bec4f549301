use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "grid_snake=info";

/// Installs the global tracing subscriber.
///
/// The terminal UI owns stdout, so events go to `log_file` when given and are
/// discarded otherwise.
pub fn init(log_file: Option<&Path>) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| AppError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::sink).init(),
    }

    Ok(())
}
