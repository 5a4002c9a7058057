//! winit driver for [`GameLoop`].
//!
//! winit delivers input through `window_event`; those callbacks only update
//! the input table and the close flag. The loop body runs on
//! `RedrawRequested`, and `about_to_wait` schedules the next redraw with
//! `ControlFlow::WaitUntil` so the frame rate stays at the clock's target.

use std::sync::Arc;
use std::time::Instant;

use pe_core::game_loop::{GameLoop, Iteration, LoopDriver};
use pe_core::input::{InputState, Key};
use pe_core::math::FRAMES_PER_SECOND;
use pe_core::time::FrameClock;
use pe_platform::EngineConfig;
use pe_render::{GpuContext, Renderer};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::keymap::map_key;
use crate::{Context, Game};

/// Everything that only exists while the window is open.
struct Frame<G: Game> {
    window: Arc<Window>,
    renderer: Renderer,
    input: InputState,
    config: EngineConfig,
    game: G,
    close_requested: bool,
    quit: bool,
}

impl<G: Game> Frame<G> {
    fn with_context(&mut self, f: impl FnOnce(&mut G, &mut Context)) {
        let mut ctx = Context::new(
            &mut self.renderer,
            &self.input,
            &self.config,
            &mut self.quit,
        );
        f(&mut self.game, &mut ctx);
    }
}

impl<G: Game> LoopDriver for Frame<G> {
    fn poll_events(&mut self) -> bool {
        // winit already delivered this frame's events through window_event.
        self.close_requested
    }

    fn clear(&mut self) {
        self.renderer.begin_frame();
    }

    fn tick(&mut self, delta: f32) {
        self.with_context(|game, ctx| game.tick(ctx, delta));
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }

    fn present(&mut self) {
        self.window.pre_present_notify();
        self.renderer.end_frame();
    }

    fn end_frame(&mut self) {
        self.input.end_frame();
    }

    fn teardown(&mut self) {
        log::info!("Terminating game");
        self.with_context(|game, ctx| game.terminate(ctx));
    }
}

struct App<G: Game> {
    config: EngineConfig,
    pending_game: Option<G>,
    frame: Option<Frame<G>>,
    game_loop: GameLoop,
    next_frame: Instant,
}

impl<G: Game> App<G> {
    fn new(config: EngineConfig, game: G) -> Self {
        let now = Instant::now();
        Self {
            config,
            pending_game: Some(game),
            frame: None,
            game_loop: GameLoop::new(FrameClock::with_fps(FRAMES_PER_SECOND, now)),
            next_frame: now,
        }
    }

    fn stop(&mut self, event_loop: &ActiveEventLoop) {
        self.release();
        event_loop.exit();
    }

    /// Terminate the game, report, then drop the window and GPU context.
    /// Only the first call does anything.
    fn release(&mut self) {
        let Some(mut frame) = self.frame.take() else {
            return;
        };
        self.game_loop.shutdown(&mut frame);

        let leaked = frame.renderer.texture_count();
        if leaked > 0 {
            log::warn!("{leaked} textures still loaded after terminate");
        }
        let clock = self.game_loop.clock();
        log::info!(
            "Ran {} frames ({} over budget, {:.1} fps at the end, {} dropped by the surface)",
            clock.frame_count,
            clock.overrun_count,
            clock.smoothed_fps,
            frame.renderer.gpu.dropped_frames
        );
    }
}

impl<G: Game> ApplicationHandler for App<G> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.frame.is_some() {
            return;
        }
        let Some(game) = self.pending_game.take() else {
            return;
        };

        let window = match pe_platform::window::create_window(event_loop, &self.config) {
            Ok(window) => window,
            Err(err) => {
                log::error!("{err}");
                event_loop.exit();
                return;
            }
        };
        let size = window.inner_size();
        log::info!("Window created: {}x{}", size.width, size.height);

        let gpu = match GpuContext::new(window.clone()) {
            Ok(gpu) => gpu,
            Err(err) => {
                log::error!("{err}");
                event_loop.exit();
                return;
            }
        };
        let renderer = Renderer::new(
            gpu,
            (self.config.display_width, self.config.display_height),
            self.config.pixel_art,
        );

        let mut frame = Frame {
            window,
            renderer,
            input: InputState::new(),
            config: self.config.clone(),
            game,
            close_requested: false,
            quit: false,
        };
        frame.with_context(|game, ctx| game.init(ctx));
        log::info!("Game initialized, entering main loop");

        self.next_frame = Instant::now();
        self.frame = Some(frame);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(frame) = self.frame.as_ref() else {
            return;
        };
        if Instant::now() >= self.next_frame {
            frame.window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(frame) = self.frame.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                self.stop(event_loop);
            }

            WindowEvent::Resized(physical_size) => {
                let w = physical_size.width;
                let h = physical_size.height;
                if w > 0 && h > 0 {
                    frame.renderer.resize(w, h);
                    log::info!("Resized to {}x{}", w, h);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let mapped = match event.physical_key {
                    PhysicalKey::Code(key_code) => map_key(key_code),
                    PhysicalKey::Unidentified(_) => None,
                };
                match (event.state, mapped) {
                    (ElementState::Pressed, Some(key)) => {
                        if event.repeat {
                            return;
                        }
                        frame.input.key_down(key);
                        if key == Key::Escape {
                            frame.close_requested = true;
                        }
                    }
                    (ElementState::Released, Some(key)) => frame.input.key_up(key),
                    (ElementState::Released, None) => frame.input.unmapped_key_up(),
                    (ElementState::Pressed, None) => {}
                }
            }

            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Right,
                ..
            } => {
                frame.close_requested = true;
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                match self.game_loop.iterate(frame, now) {
                    Iteration::Continue(sleep) => {
                        self.next_frame = now.max(Instant::now()) + sleep;
                    }
                    Iteration::Terminated => self.stop(event_loop),
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.release();
    }
}

/// Open the window, run `game` until it or the OS asks to stop, then tear
/// everything down.
pub fn run<G: Game>(config: EngineConfig, game: G) -> Result<(), String> {
    log::info!("{} starting...", config.app_name);

    let event_loop =
        EventLoop::new().map_err(|e| format!("Failed to create event loop: {e}"))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, game);
    event_loop
        .run_app(&mut app)
        .map_err(|e| format!("Event loop error: {e}"))
}
