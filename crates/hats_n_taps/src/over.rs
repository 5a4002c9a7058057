//! Between-levels card: level up, game over, or the help screen. Any key
//! release goes back to gameplay.

use glam::Vec2;
use pe_core::graphics::Graphics;
use pe_core::sprite::Sprite;

use crate::res_path;
use crate::scene::{OverMode, SceneFrame, SceneKind};
use crate::timer::{Blink, BLINK_TIME_MS};

/// The card sits left of centre so the menu column stays visible.
const TEXT_SHIFT_LEFT: f32 = 200.0;
const ANY_KEY_POSITION: Vec2 = Vec2::new(35.0, 1027.0);

pub struct OverScene {
    mode: OverMode,
    text: Sprite,
    any_key: Sprite,
    any_key_blink: Blink,
}

impl OverScene {
    pub fn init(graphics: &mut dyn Graphics, mode: OverMode) -> Self {
        let file = match mode {
            OverMode::LevelUp => "levelup.png",
            OverMode::GameOver => "gameover.png",
            OverMode::Help => "help.png",
        };
        let mut text = graphics.load_texture(&res_path(file));
        let (width, height) = graphics.display_size();
        text.position = Vec2::new(
            (width / 2) as f32 - TEXT_SHIFT_LEFT - (text.width / 2) as f32,
            (height / 2) as f32 - (text.height / 2) as f32,
        );

        let any_key = graphics
            .load_texture(&res_path("anykey.png"))
            .with_position(ANY_KEY_POSITION);

        Self {
            mode,
            text,
            any_key,
            any_key_blink: Blink::new(BLINK_TIME_MS),
        }
    }

    pub fn mode(&self) -> OverMode {
        self.mode
    }

    pub fn tick(&mut self, frame: &mut SceneFrame, delta: f32) {
        if frame.input.any_released() {
            frame.switch_to(SceneKind::Gameplay);
        }

        let show_any_key = self.any_key_blink.tick(delta);

        frame.graphics.draw(&self.text);
        if show_any_key {
            frame.graphics.draw(&self.any_key);
        }
    }

    pub fn terminate(self, graphics: &mut dyn Graphics) {
        graphics.unload_texture(&self.any_key);
        graphics.unload_texture(&self.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::testing::RecordingGraphics;
    use pe_core::input::{InputState, Key};

    #[test]
    fn mode_picks_the_card_texture() {
        for (mode, file) in [
            (OverMode::LevelUp, "levelup.png"),
            (OverMode::GameOver, "gameover.png"),
            (OverMode::Help, "help.png"),
        ] {
            let mut gfx = RecordingGraphics::default();
            let scene = OverScene::init(&mut gfx, mode);
            assert!(gfx.was_loaded(file));
            assert!(gfx.was_loaded("anykey.png"));
            assert_eq!(scene.text.position, Vec2::new(710.0, 515.0));
            assert_eq!(scene.any_key.position, ANY_KEY_POSITION);
        }
    }

    #[test]
    fn any_key_release_returns_to_gameplay() {
        let mut gfx = RecordingGraphics::default();
        let mut scene = OverScene::init(&mut gfx, OverMode::LevelUp);
        let mut input = InputState::new();
        let mut settings = Settings::default();

        let mut frame = SceneFrame::new(&mut gfx, &input, &mut settings);
        scene.tick(&mut frame, 1.0);
        assert_eq!(frame.requested(), None);

        input.unmapped_key_up();
        let mut frame = SceneFrame::new(&mut gfx, &input, &mut settings);
        scene.tick(&mut frame, 1.0);
        assert_eq!(frame.requested(), Some(SceneKind::Gameplay));

        input.end_frame();
        input.key_down(Key::Space);
        let mut frame = SceneFrame::new(&mut gfx, &input, &mut settings);
        scene.tick(&mut frame, 1.0);
        assert_eq!(frame.requested(), None, "holding a key is not a release");
    }

    #[test]
    fn prompt_blinks_while_card_stays() {
        let mut gfx = RecordingGraphics::default();
        let mut scene = OverScene::init(&mut gfx, OverMode::Help);
        let input = InputState::new();
        let mut settings = Settings::default();

        let mut counts = Vec::new();
        for _ in 0..31 {
            gfx.draws.clear();
            let mut frame = SceneFrame::new(&mut gfx, &input, &mut settings);
            scene.tick(&mut frame, 1.0);
            counts.push(gfx.draws.len());
        }
        assert!(counts[..29].iter().all(|&n| n == 1));
        assert_eq!(counts[29], 2);
        assert_eq!(counts[30], 2);
    }
}
