//! Scene switching.
//!
//! Scenes ask for a switch through [`SceneFrame::switch_to`]; the director
//! applies the request at the start of the next tick by terminating the
//! running scene (freeing its textures) and initializing the new one.
//! Requesting the scene that is already running restarts it.

use pe_core::graphics::Graphics;
use pe_core::input::InputState;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::gameplay::GameplayScene;
use crate::intro::IntroScene;
use crate::over::OverScene;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverMode {
    LevelUp,
    GameOver,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    Intro,
    Gameplay,
    Over(OverMode),
}

impl SceneKind {
    /// The title/menu overlay is drawn on top of these.
    pub fn shows_menu(self) -> bool {
        !matches!(self, SceneKind::Intro)
    }
}

/// What a scene sees during one tick.
pub struct SceneFrame<'a> {
    pub graphics: &'a mut dyn Graphics,
    pub input: &'a InputState,
    pub settings: &'a mut Settings,
    requested: Option<SceneKind>,
    quit: bool,
}

impl<'a> SceneFrame<'a> {
    pub fn new(
        graphics: &'a mut dyn Graphics,
        input: &'a InputState,
        settings: &'a mut Settings,
    ) -> Self {
        Self {
            graphics,
            input,
            settings,
            requested: None,
            quit: false,
        }
    }

    /// Later requests in the same tick replace earlier ones.
    pub fn switch_to(&mut self, kind: SceneKind) {
        self.requested = Some(kind);
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn requested(&self) -> Option<SceneKind> {
        self.requested
    }
}

enum ActiveScene {
    Intro(IntroScene),
    Gameplay(GameplayScene),
    Over(OverScene),
}

impl ActiveScene {
    fn kind(&self) -> SceneKind {
        match self {
            ActiveScene::Intro(_) => SceneKind::Intro,
            ActiveScene::Gameplay(_) => SceneKind::Gameplay,
            ActiveScene::Over(scene) => SceneKind::Over(scene.mode()),
        }
    }
}

pub struct SceneDirector {
    active: Option<ActiveScene>,
    requested: Option<SceneKind>,
    rng: StdRng,
}

impl SceneDirector {
    pub fn new(start: SceneKind) -> Self {
        Self::with_rng(start, StdRng::from_entropy())
    }

    pub fn with_rng(start: SceneKind, rng: StdRng) -> Self {
        Self {
            active: None,
            requested: Some(start),
            rng,
        }
    }

    pub fn current(&self) -> Option<SceneKind> {
        self.active.as_ref().map(ActiveScene::kind)
    }

    #[cfg(test)]
    pub fn requested(&self) -> Option<SceneKind> {
        self.requested
    }

    #[cfg(test)]
    pub fn request(&mut self, kind: SceneKind) {
        self.requested = Some(kind);
    }

    /// Apply any pending switch, then tick the running scene once.
    pub fn tick(&mut self, frame: &mut SceneFrame, delta: f32) {
        if let Some(kind) = self.requested.take() {
            self.change_scene(kind, frame);
        }

        match self.active.as_mut() {
            Some(ActiveScene::Intro(scene)) => scene.tick(frame, delta),
            Some(ActiveScene::Gameplay(scene)) => scene.tick(frame, &mut self.rng, delta),
            Some(ActiveScene::Over(scene)) => scene.tick(frame, delta),
            None => {}
        }

        if let Some(kind) = frame.requested() {
            self.requested = Some(kind);
        }
    }

    fn change_scene(&mut self, kind: SceneKind, frame: &mut SceneFrame) {
        self.terminate_active(frame.graphics);

        log::info!("Entering scene {kind:?}");
        let scene = match kind {
            SceneKind::Intro => ActiveScene::Intro(IntroScene::init(frame.graphics)),
            SceneKind::Gameplay => ActiveScene::Gameplay(GameplayScene::init(
                frame.graphics,
                frame.settings,
                &mut self.rng,
            )),
            SceneKind::Over(mode) => ActiveScene::Over(OverScene::init(frame.graphics, mode)),
        };
        self.active = Some(scene);
    }

    fn terminate_active(&mut self, graphics: &mut dyn Graphics) {
        match self.active.take() {
            Some(ActiveScene::Intro(scene)) => scene.terminate(graphics),
            Some(ActiveScene::Gameplay(scene)) => scene.terminate(graphics),
            Some(ActiveScene::Over(scene)) => scene.terminate(graphics),
            None => {}
        }
    }

    /// Terminate the running scene without starting another.
    pub fn shutdown(&mut self, graphics: &mut dyn Graphics) {
        self.requested = None;
        self.terminate_active(graphics);
    }
}
