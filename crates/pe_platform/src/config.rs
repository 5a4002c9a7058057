//! Engine configuration.
//!
//! Every field has a default so a missing `res/engine.json`, or a file that
//! only overrides a couple of keys, still produces a usable config. The
//! display size is the virtual resolution sprites are positioned in; the
//! renderer maps it onto whatever the window actually measures.

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub app_name: String,
    pub display_width: u32,
    pub display_height: u32,
    pub full_screen: bool,
    /// Nearest filtering instead of linear.
    pub pixel_art: bool,
    pub show_cursor: bool,
    /// Route log output to `log.txt` instead of stderr.
    pub debug: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_name: "WorkingTitle".to_string(),
            display_width: 1920,
            display_height: 1080,
            full_screen: true,
            pixel_art: false,
            show_cursor: false,
            debug: false,
        }
    }
}

impl EngineConfig {
    pub fn with_app_name(mut self, name: &str) -> Self {
        self.app_name = name.to_string();
        self
    }
}

pub fn load_engine_config(path: &Path) -> Result<EngineConfig, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read engine config {}: {e}", path.display()))?;
    let config: EngineConfig = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse engine config {}: {e}", path.display()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Load the config at `path`, or fall back to `fallback` when the file is
/// absent. A present but malformed file is reported and also falls back.
pub fn load_or_default(path: &Path, fallback: EngineConfig) -> EngineConfig {
    if !path.exists() {
        return fallback;
    }
    match load_engine_config(path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}; using built-in defaults");
            fallback
        }
    }
}

fn validate_config(config: &EngineConfig) -> Result<(), String> {
    if config.display_width == 0 || config.display_height == 0 {
        return Err(format!(
            "Engine config validation failed: display size {}x{} has a zero dimension",
            config.display_width, config.display_height
        ));
    }
    Ok(())
}
