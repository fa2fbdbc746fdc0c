//! Process setup shared by the binary: logging.

use anyhow::{Context, Result};
use log::info;
use std::path::Path;

pub const DEFAULT_LOG_FILE: &str = "viewfinder.log";

/// Map `-v` count to a level: 0 = warn, 1 = info, 2 = debug, 3+ = trace.
pub fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Initialize env_logger, to console (respects RUST_LOG) or to a file.
pub fn init_logger(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
    let level = log_level(verbosity);

    if let Some(log_path) = log_file {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;

        env_logger::Builder::new()
            .filter_level(level)
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!("Logging to file: {} (level: {:?})", log_path.display(), level);
    } else {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(level.as_str().to_lowercase()),
        )
        .filter_module("egui", log::LevelFilter::Info)
        .format_timestamp_millis()
        .init();
    }

    Ok(())
}
