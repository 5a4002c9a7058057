use pe_core::math::FRAME_TARGET_MS;

pub const BLINK_TIME_MS: f32 = 500.0;

/// Fires once each time more than `period_ms` has accumulated, then starts
/// over from zero. Time is counted in frames scaled by `FRAME_TARGET_MS`.
#[derive(Debug, Clone)]
pub struct Interval {
    pub period_ms: f32,
    pub elapsed_ms: f32,
}

impl Interval {
    pub fn new(period_ms: f32) -> Self {
        Self {
            period_ms,
            elapsed_ms: 0.0,
        }
    }

    pub fn tick(&mut self, delta: f32) -> bool {
        self.elapsed_ms += delta * FRAME_TARGET_MS;
        if self.elapsed_ms > self.period_ms {
            self.elapsed_ms = 0.0;
            return true;
        }
        false
    }
}

/// On/off toggle driven by an [`Interval`]. Starts hidden.
#[derive(Debug, Clone)]
pub struct Blink {
    interval: Interval,
    pub visible: bool,
}

impl Blink {
    pub fn new(period_ms: f32) -> Self {
        Self {
            interval: Interval::new(period_ms),
            visible: false,
        }
    }

    pub fn tick(&mut self, delta: f32) -> bool {
        if self.interval.tick(delta) {
            self.visible = !self.visible;
        }
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_fires_after_period_and_restarts() {
        let mut interval = Interval::new(250.0);
        let fired: Vec<usize> = (0..40).filter(|_| interval.tick(1.0)).collect();
        // 15 frames of 16.67ms just exceed 250ms.
        assert_eq!(fired, vec![14, 29]);
    }

    #[test]
    fn blink_toggles_every_half_second() {
        let mut blink = Blink::new(BLINK_TIME_MS);
        assert!(!blink.visible);
        for _ in 0..29 {
            blink.tick(1.0);
        }
        assert!(!blink.visible);
        blink.tick(1.0);
        assert!(blink.visible);
    }
}
