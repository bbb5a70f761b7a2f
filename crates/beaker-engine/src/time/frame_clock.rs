use std::time::Instant;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Milliseconds elapsed since the clock was created. Never decreases.
    pub now_ms: u64,

    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// `now_ms` is measured from the clock's creation, so a fresh clock starts at zero
/// the same way a sketch's `millis()` does.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last_ms: u64,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates a clock whose zero point is `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self { start, last_ms: 0, frame_index: 0 }
    }

    /// Milliseconds since the zero point, without advancing the frame counter.
    pub fn now_ms(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(self.now_ms())
    }

    /// Advances the clock to an externally observed timestamp.
    ///
    /// Timestamps older than the previous tick are held at the previous value.
    pub fn tick_at(&mut self, now_ms: u64) -> FrameTime {
        let now_ms = now_ms.max(self.last_ms);
        let dt = (now_ms - self.last_ms) as f32 / 1000.0;
        self.last_ms = now_ms;

        let ft = FrameTime {
            now_ms,
            dt,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
