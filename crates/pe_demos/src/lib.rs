//! Shared bits of the demo programs.

use std::path::Path;

use pe_core::sprite::Sprite;
use pe_core::Vec2;
use pe_platform::EngineConfig;

/// Demos run windowed and fall back to these defaults without a config file.
pub fn demo_config(app_name: &str) -> EngineConfig {
    let defaults = EngineConfig {
        full_screen: false,
        show_cursor: true,
        ..EngineConfig::default()
    }
    .with_app_name(app_name);
    pe_platform::load_or_default(Path::new("res/engine.json"), defaults)
}

/// Top-left corners of a `columns` x `rows` grid of `tile`-sized cells,
/// row by row.
pub fn grid_positions(tile: &Sprite, columns: u32, rows: u32, margin: f32, gap: f32) -> Vec<Vec2> {
    let step = Vec2::new(tile.width as f32 + gap, tile.height as f32 + gap);
    (0..rows)
        .flat_map(|y| (0..columns).map(move |x| (x, y)))
        .map(|(x, y)| Vec2::splat(margin) + step * Vec2::new(x as f32, y as f32))
        .collect()
}
