//! Scalar and 2D vector helpers used to place sprites.
//!
//! Angles are degrees at the sprite level and radians inside `rotate`.
//! Screen space is pixels with the origin at the top-left corner and y
//! growing downwards; `translate_x`/`translate_y` map it to normalized device
//! coordinates.

use glam::Vec2;

pub const FRAMES_PER_SECOND: u32 = 60;
/// Milliseconds per frame at the target rate. Game timers advance by
/// `delta * FRAME_TARGET_MS` each tick.
pub const FRAME_TARGET_MS: f32 = 16.67;
pub const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;

pub fn to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

pub fn to_degrees(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}

/// Map a pixel x coordinate onto [-1, 1].
pub fn translate_x(x: f32, display_width: u32) -> f32 {
    x * 2.0 / display_width as f32 - 1.0
}

/// Map a pixel y coordinate onto [1, -1] (screen y points down, NDC y up).
pub fn translate_y(y: f32, display_height: u32) -> f32 {
    y * -2.0 / display_height as f32 + 1.0
}

/// Rotate `point` about `pivot` by `angle` radians.
pub fn rotate(point: Vec2, pivot: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let offset = point - pivot;
    Vec2::new(
        offset.x * cos - offset.y * sin + pivot.x,
        offset.x * sin + offset.y * cos + pivot.y,
    )
}

/// `percentage` is expected in [0, 1]; 0 yields `start`, 1 yields `target`.
pub fn lerp(start: f32, target: f32, percentage: f32) -> f32 {
    if percentage >= 1.0 {
        return target;
    }
    start + percentage * (target - start)
}

pub fn lerp_vec2(start: Vec2, target: Vec2, percentage: f32) -> Vec2 {
    Vec2::new(
        lerp(start.x, target.x, percentage),
        lerp(start.y, target.y, percentage),
    )
}

/// Values outside [lower, upper] are folded back with a modulo of the range.
pub fn wrap(value: f32, lower: f32, upper: f32) -> f32 {
    if value >= lower && value <= upper {
        return value;
    }
    (value - lower).rem_euclid(upper - lower) + lower
}

/// Interpolate between two headings in degrees along the shorter arc.
pub fn angular_lerp(start: f32, target: f32, percentage: f32) -> f32 {
    let mut from = start;
    let mut to = target;

    if (to - from).abs() > 180.0 {
        if to > from {
            from += 360.0;
        } else {
            to += 360.0;
        }
        return wrap(lerp(from, to, percentage), 0.0, 360.0);
    }

    lerp(from, to, percentage)
}

pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Smallest angle between two headings, in degrees, always within [0, 180].
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let diff = (a - b).rem_euclid(360.0);
    diff.min(360.0 - diff)
}
