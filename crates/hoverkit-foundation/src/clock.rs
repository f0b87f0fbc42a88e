//! Frame-delta tracking for hosts without their own tick timing

use web_time::Instant;

/// Produces per-frame elapsed seconds for behavior ticks.
///
/// Behaviors only consume plain deltas, so hosts with their own frame timing
/// never need this; it exists for hosts that drive ticks from a render loop
/// without one.
#[derive(Clone, Debug)]
pub struct TickClock {
    last: Instant,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call (or construction), advancing the
    /// clock.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        delta
    }

    /// Restarts the clock so the next tick measures from now.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}
