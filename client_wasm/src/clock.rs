//! Fixed-rate tick clock driven by `requestAnimationFrame` timestamps

/// Catch-up cap. A stalled tab resumes instead of fast-forwarding.
pub const MAX_TICKS_PER_FRAME: u32 = 4;

#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_ms: f64,
    last_ms: Option<f64>,
    accumulator: f64,
}

impl FrameClock {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            tick_ms: 1000.0 / tick_rate as f64,
            last_ms: None,
            accumulator: 0.0,
        }
    }

    /// Number of simulation ticks due at `now_ms`
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let Some(last) = self.last_ms.replace(now_ms) else {
            // First frame: run one tick so the scene is never stale
            return 1;
        };

        self.accumulator += (now_ms - last).max(0.0);
        let due = (self.accumulator / self.tick_ms).floor() as u32;
        if due > MAX_TICKS_PER_FRAME {
            self.accumulator = 0.0;
            return MAX_TICKS_PER_FRAME;
        }
        self.accumulator -= due as f64 * self.tick_ms;
        due
    }
}
