use std::path::Path;

use crate::sprite::Sprite;

/// What game code needs from a renderer.
///
/// Implemented by the GPU renderer and by recording fakes in tests, so scene
/// logic can run without a window.
pub trait Graphics {
    /// Decode an image and upload it. Failures are logged by the implementor
    /// and still yield a drawable sprite.
    fn load_texture(&mut self, path: &Path) -> Sprite;

    /// Free the texture behind `sprite.id`. Unknown or zero ids are ignored.
    fn unload_texture(&mut self, sprite: &Sprite);

    /// Queue exactly one textured quad for the current frame.
    fn draw(&mut self, sprite: &Sprite);

    /// Virtual display size sprites are positioned in.
    fn display_size(&self) -> (u32, u32);
}
