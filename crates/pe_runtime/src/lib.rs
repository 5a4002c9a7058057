//! Glue between the engine crates and a game.
//!
//! A game implements [`Game`] and hands itself to [`run`]. Every callback
//! receives a [`Context`] with the graphics backend, this frame's input and
//! the engine config. Games ask to stop with [`Context::quit`].

mod keymap;
mod runner;

use pe_core::graphics::Graphics;
use pe_core::input::InputState;
use pe_platform::EngineConfig;

pub use keymap::map_key;
pub use runner::run;

pub trait Game {
    /// Called once, after the window and GPU context exist.
    fn init(&mut self, ctx: &mut Context);
    /// Called exactly once per loop iteration. `delta` is 1.0 per frame.
    fn tick(&mut self, ctx: &mut Context, delta: f32);
    /// Called once, before the GPU context is dropped.
    fn terminate(&mut self, ctx: &mut Context);
}

pub struct Context<'a> {
    pub graphics: &'a mut dyn Graphics,
    pub input: &'a InputState,
    pub config: &'a EngineConfig,
    quit: &'a mut bool,
}

impl<'a> Context<'a> {
    pub fn new(
        graphics: &'a mut dyn Graphics,
        input: &'a InputState,
        config: &'a EngineConfig,
        quit: &'a mut bool,
    ) -> Self {
        Self {
            graphics,
            input,
            config,
            quit,
        }
    }

    /// Stop the loop once the current iteration completes.
    pub fn quit(&mut self) {
        *self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        *self.quit
    }

    pub fn display_size(&self) -> (u32, u32) {
        self.graphics.display_size()
    }
}
