//! Monotonic frame clock shared by every animated component.

use instant::Instant;

/// Result of a single [`Clock::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tick {
    /// Seconds since the previous tick, never negative.
    pub delta: f32,
    /// Seconds accumulated since the clock was created.
    pub elapsed: f32,
}

/// Frame clock. `elapsed` only ever grows; it is the sum of every delta.
#[derive(Clone, Debug)]
pub struct Clock {
    elapsed: f32,
    last_sample: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            last_sample: Instant::now(),
        }
    }

    /// Sample the wall clock. Call once per presented frame.
    pub fn tick(&mut self) -> Tick {
        let now = Instant::now();
        // saturate in case the host timer steps backwards
        let delta = if now > self.last_sample {
            (now - self.last_sample).as_secs_f32()
        } else {
            0.0
        };
        self.last_sample = now;
        self.advance(delta)
    }

    /// Step the clock by an explicit amount instead of sampling wall time.
    pub fn advance(&mut self, delta: f32) -> Tick {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.elapsed += delta;
        Tick {
            delta,
            elapsed: self.elapsed,
        }
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
