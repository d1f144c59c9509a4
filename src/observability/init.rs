//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFile;
use crate::Config;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Name of the log file written under the data directory.
pub const LOG_FILE_NAME: &str = "game-launcher.log";

/// Level used when neither `RUST_LOG` nor the config sets one.
const DEFAULT_LEVEL: &str = "warn";

/// Installs the global tracing subscriber.
///
/// Log events go to stderr, filtered by:
/// 1. `RUST_LOG`, if set and valid
/// 2. `config.trace_level`
/// 3. `"warn"`
///
/// When `config.log_to_file` is set, the same events are also appended
/// (without colors) to `game-launcher.log` in the data directory, rotated at
/// 10 MB with three backups. If the directory can't be created the file layer
/// is skipped.
///
/// Only the first call in a process installs anything.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!config.no_color);

    let file_layer = config.log_to_file.then(|| {
        let data_dir = crate::infrastructure::paths::get_data_dir();
        std::fs::create_dir_all(&data_dir).ok()?;

        let writer = RotatingFile::new(data_dir.join(LOG_FILE_NAME));
        Some(
            fmt::layer()
                .with_writer(Mutex::new(writer))
                .with_ansi(false)
                .boxed(),
        )
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer.flatten())
        .try_init();
}
