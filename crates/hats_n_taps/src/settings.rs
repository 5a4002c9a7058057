//! Progress saved between runs: the current level and the highest level
//! unlocked. Stored as the raw 8-byte record, no header or version.

use bytemuck::{Pod, Zeroable};
use std::fs;
use std::path::Path;

pub const SETTINGS_PATH: &str = "res/settings.dat";

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Settings {
    pub level: i32,
    pub max: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self { level: 1, max: 1 }
    }
}

impl Settings {
    pub const RECORD_SIZE: usize = std::mem::size_of::<Settings>();

    /// `None` when `bytes` is too short to hold a record. Trailing bytes are
    /// ignored.
    pub fn from_bytes(bytes: &[u8]) -> Option<Settings> {
        bytes
            .get(..Self::RECORD_SIZE)
            .map(bytemuck::pod_read_unaligned::<Settings>)
    }

    pub fn load(path: &Path) -> Result<Settings, String> {
        let bytes = fs::read(path)
            .map_err(|e| format!("Failed to read settings {}: {e}", path.display()))?;
        Self::from_bytes(&bytes).ok_or_else(|| {
            format!(
                "Settings file {} is {} bytes, expected {}",
                path.display(),
                bytes.len(),
                Self::RECORD_SIZE
            )
        })
    }

    /// Defaults when the file is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Settings {
        if !path.exists() {
            log::info!("No settings at {}, starting at level 1", path.display());
            return Settings::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                log::info!(
                    "Loaded settings: level {} (max {})",
                    settings.level,
                    settings.max
                );
                settings
            }
            Err(err) => {
                log::warn!("{err}; using defaults");
                Settings::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        fs::write(path, bytemuck::bytes_of(self))
            .map_err(|e| format!("Failed to write settings {}: {e}", path.display()))
    }
}
