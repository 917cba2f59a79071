use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Counts ticks in one-second windows.
#[derive(Debug, Clone)]
pub struct TickCounter {
    window_start: Instant,
    frames: u32,
}

impl TickCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
        }
    }

    /// Record one tick at `now`. Returns the window's tick count once a second has passed.
    pub fn record(&mut self, now: Instant) -> Option<u32> {
        self.frames += 1;
        if now.saturating_duration_since(self.window_start) >= WINDOW {
            let frames = self.frames;
            self.frames = 0;
            self.window_start = now;
            Some(frames)
        } else {
            None
        }
    }
}
