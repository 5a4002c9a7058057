pub mod game_loop;
pub mod graphics;
pub mod input;
pub mod math;
pub mod quad;
pub mod sprite;
pub mod time;

pub use glam::{IVec2, Vec2};
pub use graphics::Graphics;
pub use sprite::{Rect, Sprite, TextureId};
