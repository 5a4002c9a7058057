use std::time::{Duration, Instant};

use crate::math::FRAMES_PER_SECOND;

const FPS_SAMPLE_COUNT: usize = 60;

/// Frame pacing for a sleep-based fixed timestep.
///
/// There is no accumulator: each frame is given `target` of wall-clock time
/// and whatever is left after the work is slept away. An overrun sleeps zero
/// and the lost time is never paid back.
pub struct FrameClock {
    pub target: Duration,
    frame_start: Instant,
    pub frame_count: u64,
    pub overrun_count: u64,
    pub last_work: Duration,

    fps_samples: [f64; FPS_SAMPLE_COUNT],
    fps_sample_index: usize,
    last_frame_start: Option<Instant>,
    pub smoothed_fps: f64,
}

impl FrameClock {
    pub fn new(target: Duration, now: Instant) -> Self {
        Self {
            target,
            frame_start: now,
            frame_count: 0,
            overrun_count: 0,
            last_work: Duration::ZERO,
            fps_samples: [target.as_secs_f64(); FPS_SAMPLE_COUNT],
            fps_sample_index: 0,
            last_frame_start: None,
            smoothed_fps: FRAMES_PER_SECOND as f64,
        }
    }

    pub fn with_fps(fps: u32, now: Instant) -> Self {
        Self::new(Duration::from_millis(1000 / u64::from(fps.max(1))), now)
    }

    pub fn begin_frame(&mut self, now: Instant) {
        if let Some(previous) = self.last_frame_start {
            self.fps_samples[self.fps_sample_index] = now.duration_since(previous).as_secs_f64();
            self.fps_sample_index = (self.fps_sample_index + 1) % FPS_SAMPLE_COUNT;
            let avg_dt: f64 = self.fps_samples.iter().sum::<f64>() / FPS_SAMPLE_COUNT as f64;
            self.smoothed_fps = if avg_dt > 0.0 { 1.0 / avg_dt } else { 0.0 };
        }
        self.last_frame_start = Some(now);
        self.frame_start = now;
        self.frame_count += 1;
    }

    /// Time left in this frame's budget: `max(0, target - elapsed)`.
    pub fn end_frame(&mut self, now: Instant) -> Duration {
        self.last_work = now.saturating_duration_since(self.frame_start);
        match self.target.checked_sub(self.last_work) {
            Some(remaining) => remaining,
            None => {
                self.overrun_count += 1;
                log::trace!(
                    "Frame {} overran budget: {:.1}ms",
                    self.frame_count,
                    self.last_work.as_secs_f64() * 1000.0
                );
                Duration::ZERO
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_fps_budget_is_sixteen_ms() {
        let clock = FrameClock::with_fps(60, Instant::now());
        assert_eq!(clock.target, Duration::from_millis(16));
    }

    #[test]
    fn remaining_time_is_budget_minus_work() {
        let start = Instant::now();
        let mut clock = FrameClock::new(Duration::from_millis(16), start);
        clock.begin_frame(start);
        let sleep = clock.end_frame(start + Duration::from_millis(6));
        assert_eq!(sleep, Duration::from_millis(10));
        assert_eq!(clock.overrun_count, 0);
    }

    #[test]
    fn overrun_sleeps_zero_and_does_not_catch_up() {
        let start = Instant::now();
        let mut clock = FrameClock::new(Duration::from_millis(16), start);
        clock.begin_frame(start);
        let sleep = clock.end_frame(start + Duration::from_millis(40));
        assert_eq!(sleep, Duration::ZERO);
        assert_eq!(clock.overrun_count, 1);

        // The next frame gets a plain budget again, not a shortened one.
        let next = start + Duration::from_millis(40);
        clock.begin_frame(next);
        let sleep = clock.end_frame(next + Duration::from_millis(1));
        assert_eq!(sleep, Duration::from_millis(15));
    }

    #[test]
    fn frame_count_advances_per_begin() {
        let start = Instant::now();
        let mut clock = FrameClock::with_fps(60, start);
        for i in 0..5u64 {
            clock.begin_frame(start + Duration::from_millis(16 * i));
        }
        assert_eq!(clock.frame_count, 5);
    }

    #[test]
    fn smoothed_fps_follows_the_real_frame_interval() {
        let start = Instant::now();
        let mut clock = FrameClock::with_fps(60, start);
        assert_eq!(clock.smoothed_fps, 60.0);

        // The first frame has no predecessor; the next 60 fill the ring.
        for i in 0..=FPS_SAMPLE_COUNT as u64 {
            clock.begin_frame(start + Duration::from_millis(20 * i));
        }
        assert!((clock.smoothed_fps - 50.0).abs() < 0.01, "got {}", clock.smoothed_fps);
    }
}
