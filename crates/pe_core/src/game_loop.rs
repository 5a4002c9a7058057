//! Fixed-timestep loop state machine.
//!
//! One iteration: drain OS events, then (if still running) clear, run the
//! game callback once, present, reset per-frame input, and report how long
//! to sleep. The platform layer owns the actual waiting, so the state
//! machine stays testable without a window.

use std::time::{Duration, Instant};

use crate::time::FrameClock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Hooks the loop drives, in the order they are listed.
pub trait LoopDriver {
    /// Apply pending OS events. Returns true when the OS asked to close.
    fn poll_events(&mut self) -> bool;
    fn clear(&mut self);
    /// Run the game callback once.
    fn tick(&mut self, delta: f32);
    /// True once the game asked to quit during a tick.
    fn quit_requested(&self) -> bool;
    fn present(&mut self);
    /// Reset "released this frame" input.
    fn end_frame(&mut self);
    fn teardown(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iteration {
    /// Sleep this long before the next iteration.
    Continue(Duration),
    Terminated,
}

pub struct GameLoop {
    state: LoopState,
    clock: FrameClock,
    torn_down: bool,
}

impl GameLoop {
    /// Delta handed to the game each frame. Timers scale it by
    /// `FRAME_TARGET_MS`.
    pub const DELTA: f32 = 1.0;

    pub fn new(clock: FrameClock) -> Self {
        Self {
            state: LoopState::Running,
            clock,
            torn_down: false,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn iterate<D: LoopDriver>(&mut self, driver: &mut D, now: Instant) -> Iteration {
        if self.state == LoopState::Terminated {
            self.shutdown(driver);
            return Iteration::Terminated;
        }

        self.clock.begin_frame(now);

        if driver.poll_events() {
            log::info!("Close requested, exiting.");
            self.state = LoopState::Terminated;
            self.shutdown(driver);
            return Iteration::Terminated;
        }

        driver.clear();
        driver.tick(Self::DELTA);
        driver.present();
        driver.end_frame();

        if driver.quit_requested() {
            log::info!("Game requested quit after frame {}", self.clock.frame_count);
            self.state = LoopState::Terminated;
            self.shutdown(driver);
            return Iteration::Terminated;
        }

        Iteration::Continue(self.clock.end_frame(Instant::now().max(now)))
    }

    /// Move to `Terminated` and run teardown. Safe to call more than once;
    /// teardown only runs the first time.
    pub fn shutdown<D: LoopDriver>(&mut self, driver: &mut D) {
        self.state = LoopState::Terminated;
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        driver.teardown();
    }
}
