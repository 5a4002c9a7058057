use std::sync::Arc;
use winit::dpi::PhysicalPosition;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Window, WindowAttributes};

use crate::config::EngineConfig;

/// Windowed mode opens at two thirds of the virtual display size.
const WINDOWED_FRACTION: f64 = 2.0 / 3.0;

pub fn window_attributes(config: &EngineConfig) -> WindowAttributes {
    let attrs = WindowAttributes::default()
        .with_title(&config.app_name)
        .with_resizable(false);

    if config.full_screen {
        attrs.with_fullscreen(Some(Fullscreen::Borderless(None)))
    } else {
        let (width, height) = windowed_size(config);
        attrs.with_inner_size(winit::dpi::LogicalSize::new(width, height))
    }
}

pub fn windowed_size(config: &EngineConfig) -> (u32, u32) {
    (
        (config.display_width as f64 * WINDOWED_FRACTION) as u32,
        (config.display_height as f64 * WINDOWED_FRACTION) as u32,
    )
}

/// Top-left corner that centers a `window`-sized rectangle on a monitor at
/// `monitor_origin`. A window larger than the monitor is pinned to its corner.
pub fn centered_origin(
    monitor_origin: (i32, i32),
    monitor_size: (u32, u32),
    window: (u32, u32),
) -> (i32, i32) {
    let offset = |monitor: u32, window: u32| (monitor.saturating_sub(window) / 2) as i32;
    (
        monitor_origin.0 + offset(monitor_size.0, window.0),
        monitor_origin.1 + offset(monitor_size.1, window.1),
    )
}

pub fn create_window(
    event_loop: &ActiveEventLoop,
    config: &EngineConfig,
) -> Result<Arc<Window>, String> {
    let mut attrs = window_attributes(config);

    // Wayland reports no primary monitor; the compositor places the window.
    if let Some(monitor) = event_loop.primary_monitor().filter(|_| !config.full_screen) {
        let scale = monitor.scale_factor();
        let (width, height) = windowed_size(config);
        let physical = ((width as f64 * scale) as u32, (height as f64 * scale) as u32);
        let origin = monitor.position();
        let size = monitor.size();
        let (x, y) = centered_origin((origin.x, origin.y), (size.width, size.height), physical);
        attrs = attrs.with_position(PhysicalPosition::new(x, y));
    }

    let window = event_loop
        .create_window(attrs)
        .map_err(|e| format!("Failed to create window: {e}"))?;
    window.set_cursor_visible(config.show_cursor);
    Ok(Arc::new(window))
}
