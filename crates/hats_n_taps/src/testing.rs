//! Graphics backend that records calls instead of touching a GPU.

use std::path::{Path, PathBuf};

use pe_core::graphics::Graphics;
use pe_core::sprite::{Sprite, TextureId};

pub const TEXTURE_WIDTH: u32 = 100;
pub const TEXTURE_HEIGHT: u32 = 50;

#[derive(Default)]
pub struct RecordingGraphics {
    pub loaded: Vec<(TextureId, PathBuf)>,
    pub unloaded: Vec<TextureId>,
    pub draws: Vec<Sprite>,
    next_id: u32,
}

impl RecordingGraphics {
    pub fn was_loaded(&self, file_name: &str) -> bool {
        self.loaded.iter().any(|(_, path)| path.ends_with(file_name))
    }

    pub fn live_textures(&self) -> usize {
        self.loaded
            .iter()
            .filter(|(id, _)| !self.unloaded.contains(id))
            .count()
    }

    pub fn id_of(&self, file_name: &str) -> Option<TextureId> {
        self.loaded
            .iter()
            .rev()
            .find(|(_, path)| path.ends_with(file_name))
            .map(|(id, _)| *id)
    }

    pub fn draws_of(&self, file_name: &str) -> Vec<Sprite> {
        match self.id_of(file_name) {
            Some(id) => self.draws.iter().filter(|s| s.id == id).copied().collect(),
            None => Vec::new(),
        }
    }
}

impl Graphics for RecordingGraphics {
    fn load_texture(&mut self, path: &Path) -> Sprite {
        self.next_id += 1;
        let id = TextureId(self.next_id);
        self.loaded.push((id, path.to_path_buf()));
        Sprite::new(id, TEXTURE_WIDTH, TEXTURE_HEIGHT)
    }

    fn unload_texture(&mut self, sprite: &Sprite) {
        if !sprite.id.is_none() && !self.unloaded.contains(&sprite.id) {
            self.unloaded.push(sprite.id);
        }
    }

    fn draw(&mut self, sprite: &Sprite) {
        if sprite.visible {
            self.draws.push(*sprite);
        }
    }

    fn display_size(&self) -> (u32, u32) {
        (1920, 1080)
    }
}
