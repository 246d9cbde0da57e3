//! Logging initialization
//!
//! Tracing goes to stdout and to `<data_dir>/app.log`. RUST_LOG overrides
//! the configured level when set.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize tracing with stdout and file output.
///
/// Creates `data_dir` if needed and appends to `app.log` inside it.
pub fn init_tracing(log_level: &str, data_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("app.log"))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();

    Ok(())
}
