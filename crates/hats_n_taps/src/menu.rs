//! Title and key list in the right-hand column. Entries that do nothing
//! right now ("previous" on level 1, "next" at the highest unlocked level)
//! are covered by a patch sprite.

use glam::Vec2;
use pe_core::graphics::Graphics;
use pe_core::sprite::Sprite;

use crate::res_path;
use crate::settings::Settings;

const TITLE_POSITION: Vec2 = Vec2::new(1500.0, 40.0);
const MENU_POSITION: Vec2 = Vec2::new(1500.0, 665.0);
const PREVIOUS_PATCH: Vec2 = Vec2::new(1500.0, 650.0);
const NEXT_PATCH: Vec2 = Vec2::new(1500.0, 740.0);

pub struct MenuOverlay {
    title: Sprite,
    menu: Sprite,
    patch: Sprite,
}

impl MenuOverlay {
    pub fn load(graphics: &mut dyn Graphics) -> Self {
        Self {
            title: graphics
                .load_texture(&res_path("title.png"))
                .with_position(TITLE_POSITION),
            menu: graphics
                .load_texture(&res_path("menu.png"))
                .with_position(MENU_POSITION),
            patch: graphics.load_texture(&res_path("patch.png")),
        }
    }

    pub fn draw(&self, graphics: &mut dyn Graphics, settings: &Settings) {
        graphics.draw(&self.title);
        graphics.draw(&self.menu);

        if settings.level <= 1 {
            graphics.draw(&self.patch.with_position(PREVIOUS_PATCH));
        }
        if settings.level == settings.max {
            graphics.draw(&self.patch.with_position(NEXT_PATCH));
        }
    }

    pub fn unload(&self, graphics: &mut dyn Graphics) {
        graphics.unload_texture(&self.patch);
        graphics.unload_texture(&self.menu);
        graphics.unload_texture(&self.title);
    }
}
