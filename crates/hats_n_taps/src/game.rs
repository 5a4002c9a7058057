use std::path::PathBuf;

use pe_runtime::{Context, Game};

use crate::menu::MenuOverlay;
use crate::scene::{SceneDirector, SceneFrame, SceneKind};
use crate::settings::Settings;

pub const START_SCENE: SceneKind = SceneKind::Intro;

pub struct HatsNTaps {
    settings: Settings,
    settings_path: PathBuf,
    director: SceneDirector,
    menu: Option<MenuOverlay>,
}

impl HatsNTaps {
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self::with_director(settings_path, SceneDirector::new(START_SCENE))
    }

    pub fn with_director(settings_path: impl Into<PathBuf>, director: SceneDirector) -> Self {
        Self {
            settings: Settings::default(),
            settings_path: settings_path.into(),
            director,
            menu: None,
        }
    }

    #[cfg(test)]
    pub fn settings(&self) -> Settings {
        self.settings
    }
}

impl Game for HatsNTaps {
    fn init(&mut self, ctx: &mut Context) {
        self.settings = Settings::load_or_default(&self.settings_path);
        self.menu = Some(MenuOverlay::load(ctx.graphics));
    }

    fn tick(&mut self, ctx: &mut Context, delta: f32) {
        let quit = {
            let mut frame = SceneFrame::new(&mut *ctx.graphics, ctx.input, &mut self.settings);
            self.director.tick(&mut frame, delta);
            frame.quit_requested()
        };
        if quit {
            ctx.quit();
        }

        if self.director.current().is_some_and(SceneKind::shows_menu) {
            if let Some(menu) = &self.menu {
                menu.draw(ctx.graphics, &self.settings);
            }
        }
    }

    fn terminate(&mut self, ctx: &mut Context) {
        match self.settings.save(&self.settings_path) {
            Ok(()) => log::info!(
                "Saved settings: level {} (max {})",
                self.settings.level,
                self.settings.max
            ),
            Err(err) => log::error!("{err}"),
        }

        self.director.shutdown(ctx.graphics);
        if let Some(menu) = self.menu.take() {
            menu.unload(ctx.graphics);
        }
    }
}
