//! Title card shown once at startup.

use glam::Vec2;
use pe_core::graphics::Graphics;
use pe_core::math::FRAME_TARGET_MS;
use pe_core::sprite::Sprite;

use crate::res_path;
use crate::scene::{SceneFrame, SceneKind};

const SHOW_AFTER_MS: f32 = 500.0;
const HIDE_AFTER_MS: f32 = 2000.0;
const LEAVE_AFTER_MS: f32 = 2500.0;

pub struct IntroScene {
    title: Sprite,
    elapsed_ms: f32,
}

impl IntroScene {
    pub fn init(graphics: &mut dyn Graphics) -> Self {
        let mut title = graphics.load_texture(&res_path("title.png"));
        let (width, height) = graphics.display_size();
        title.position = centered(width, height, &title);
        Self {
            title,
            elapsed_ms: 0.0,
        }
    }

    pub fn tick(&mut self, frame: &mut SceneFrame, delta: f32) {
        self.elapsed_ms += delta * FRAME_TARGET_MS;

        if self.elapsed_ms > SHOW_AFTER_MS && self.elapsed_ms < HIDE_AFTER_MS {
            frame.graphics.draw(&self.title);
        }

        if self.elapsed_ms > LEAVE_AFTER_MS {
            frame.switch_to(SceneKind::Gameplay);
        }
    }

    pub fn terminate(self, graphics: &mut dyn Graphics) {
        graphics.unload_texture(&self.title);
    }
}

fn centered(display_width: u32, display_height: u32, sprite: &Sprite) -> Vec2 {
    Vec2::new(
        (display_width / 2) as f32 - (sprite.width / 2) as f32,
        (display_height / 2) as f32 - (sprite.height / 2) as f32,
    )
}
