//! Hats-n-Taps: guide the player across a 7x5 board, collect every hat,
//! then step onto the pin.

mod board;
mod game;
mod gameplay;
mod intro;
mod levels;
mod menu;
mod over;
mod player;
mod scene;
mod settings;
#[cfg(test)]
mod testing;
mod timer;

use std::path::{Path, PathBuf};

use game::HatsNTaps;
use pe_platform::EngineConfig;
use settings::SETTINGS_PATH;

const RES_DIR: &str = "res";
const ENGINE_CONFIG_PATH: &str = "res/engine.json";

pub fn res_path(file_name: &str) -> PathBuf {
    Path::new(RES_DIR).join(file_name)
}

fn main() {
    let defaults = EngineConfig::default().with_app_name("Hats-n-Taps");
    let config = pe_platform::load_or_default(Path::new(ENGINE_CONFIG_PATH), defaults);
    pe_platform::logging::init(&config);

    if let Err(err) = pe_runtime::run(config, HatsNTaps::new(SETTINGS_PATH)) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
