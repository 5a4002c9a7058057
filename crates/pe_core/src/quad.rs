//! Screen-space corners of a sprite.
//!
//! `calculate_quad` applies, in order: scale (size and pivot), pivot offset,
//! rotation about the flip-adjusted pivot, then the flip corner swaps. The
//! result is read through named corners; `strip()` gives the order a
//! two-triangle strip expects.

use glam::Vec2;

use crate::math::{rotate, to_radians};
use crate::sprite::Sprite;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
}

impl Quad {
    /// Axis-aligned rectangle with its top-left corner at `origin`.
    pub fn from_rect(origin: Vec2, size: Vec2) -> Self {
        Self {
            top_left: origin,
            top_right: Vec2::new(origin.x + size.x, origin.y),
            bottom_left: Vec2::new(origin.x, origin.y + size.y),
            bottom_right: origin + size,
        }
    }

    /// Corners clockwise from the top-left.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// Triangle-strip order: top-left, top-right, bottom-left, bottom-right.
    pub fn strip(&self) -> [Vec2; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    pub fn center(&self) -> Vec2 {
        (self.top_left + self.top_right + self.bottom_left + self.bottom_right) / 4.0
    }

    /// Rotate every corner about `pivot` by `angle` radians.
    pub fn rotate(self, pivot: Vec2, angle: f32) -> Self {
        Self {
            top_left: rotate(self.top_left, pivot, angle),
            top_right: rotate(self.top_right, pivot, angle),
            bottom_left: rotate(self.bottom_left, pivot, angle),
            bottom_right: rotate(self.bottom_right, pivot, angle),
        }
    }

    /// Swap the left and right corner pairs.
    pub fn flip_horizontal(self) -> Self {
        Self {
            top_left: self.top_right,
            top_right: self.top_left,
            bottom_left: self.bottom_right,
            bottom_right: self.bottom_left,
        }
    }

    /// Swap the top and bottom corner pairs.
    pub fn flip_vertical(self) -> Self {
        Self {
            top_left: self.bottom_left,
            top_right: self.bottom_right,
            bottom_left: self.top_left,
            bottom_right: self.top_right,
        }
    }

    pub fn approx_eq(&self, other: &Quad, epsilon: f32) -> bool {
        self.corners()
            .iter()
            .zip(other.corners().iter())
            .all(|(a, b)| a.abs_diff_eq(*b, epsilon))
    }
}

pub fn calculate_quad(sprite: &Sprite) -> Quad {
    let angle = to_radians(sprite.rotation);
    let mut size = Vec2::new(sprite.source.width as f32, sprite.source.height as f32);
    let mut pivot = sprite.pivot;

    if sprite.scale != 1.0 {
        size *= sprite.scale;
        pivot *= sprite.scale;
    }

    let position = sprite.position - pivot;
    let mut quad = Quad::from_rect(position, size);

    if angle != 0.0 {
        if sprite.flip_x {
            pivot.x = size.x - pivot.x;
        }
        if sprite.flip_y {
            pivot.y = size.y - pivot.y;
        }
        quad = quad.rotate(pivot + position, angle);
    }

    if sprite.flip_x {
        quad = quad.flip_horizontal();
    }
    if sprite.flip_y {
        quad = quad.flip_vertical();
    }

    quad
}
