use std::time::Duration;

/// Turns variable display-frame deltas into whole fixed-rate ticks.
///
/// The remainder carries over between frames. After a long stall (hidden
/// tab, debugger) at most `max_catch_up` ticks run and the backlog is dropped.
#[derive(Clone, Debug)]
pub struct FramePacer {
    step: Duration,
    accum: Duration,
    max_catch_up: u32,
}

impl FramePacer {
    pub fn new(frame_rate: f64, max_catch_up: u32) -> Self {
        let rate = if frame_rate.is_finite() && frame_rate > 0.0 {
            frame_rate
        } else {
            60.0
        };
        Self {
            step: Duration::from_secs_f64(1.0 / rate),
            accum: Duration::ZERO,
            max_catch_up: max_catch_up.max(1),
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Number of ticks due after `dt` of wall-clock time.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.accum += dt;
        let mut ticks = 0;
        while self.accum >= self.step && ticks < self.max_catch_up {
            self.accum -= self.step;
            ticks += 1;
        }
        if ticks == self.max_catch_up && self.accum >= self.step {
            log::debug!("[pacer] dropping {:?} of backlog", self.accum);
            self.accum = Duration::ZERO;
        }
        ticks
    }

    pub fn reset(&mut self) {
        self.accum = Duration::ZERO;
    }
}
