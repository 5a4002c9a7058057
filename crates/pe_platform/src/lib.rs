pub mod config;
pub mod logging;
pub mod window;

pub use config::{load_engine_config, load_or_default, EngineConfig};
