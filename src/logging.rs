//! Log setup.
//!
//! The terminal is in raw mode on the alternate screen while the player runs,
//! so anything written to stderr would corrupt the UI. Logs are appended to a
//! file instead (`<tmp>/wavdeck.log` unless `[logging].file` says otherwise).
//! `RUST_LOG` overrides the configured level.

use std::fs::OpenOptions;
use std::io;

use env_logger::{Builder, Env, Target};

use crate::config::LoggingSettings;

pub fn init(settings: &LoggingSettings) -> io::Result<()> {
    let path = settings.file_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    // A second init (tests, repeated runs in one process) is harmless.
    let _ = Builder::from_env(Env::default().default_filter_or(settings.level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();

    log::info!("logging to {}", path.display());
    Ok(())
}
