//! Logger setup.
//!
//! Normal runs log to stderr through `env_logger` (default filter `info`,
//! overridable with `RUST_LOG`). With `debug` enabled the same records go to a
//! log file that is truncated at startup.

use std::fs::File;
use std::path::Path;

use crate::config::EngineConfig;

pub const DEBUG_LOG_PATH: &str = "log.txt";

pub fn init(config: &EngineConfig) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if config.debug {
        match File::create(Path::new(DEBUG_LOG_PATH)) {
            Ok(file) => {
                builder
                    .target(env_logger::Target::Pipe(Box::new(file)))
                    .filter_level(log::LevelFilter::Debug);
            }
            Err(err) => eprintln!("Failed to create {DEBUG_LOG_PATH}: {err}"),
        }
    }

    if builder.try_init().is_err() {
        log::warn!("Logger already initialized");
    }
}
