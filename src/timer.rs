/// Frame clock and per-entity repeating tickers.
///
/// Both are driven by elapsed time handed in by the caller, so the
/// simulation never reads the wall clock itself.

use std::time::{Duration, Instant};

// ── Ticker ────────────────────────────────────────────────────────────────────

/// A repeating countdown owned by a single entity.
///
/// `advance` accumulates frame time and reports how many whole periods
/// elapsed while the ticker was running.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticker {
    period: f64,
    elapsed: f64,
    running: bool,
}

impl Ticker {
    pub fn new(period: f64) -> Self {
        Ticker {
            period,
            elapsed: 0.0,
            running: false,
        }
    }

    /// (Re)start from a fresh period.
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.elapsed = 0.0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn advance(&mut self, dt: f64) -> u32 {
        if !self.running || self.period <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }
}

// ── Frame clock ───────────────────────────────────────────────────────────────

/// Measures per-frame delta time and a once-per-second frame rate.
#[derive(Debug)]
pub struct FrameClock {
    last: Option<Instant>,
    time_elapsed: f64,
    frame_rate: u32,
    frames_this_second: u32,
    second_accumulator: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock {
            last: None,
            time_elapsed: 0.0,
            frame_rate: 0,
            frames_this_second: 0,
            second_accumulator: 0.0,
        }
    }

    /// Sample the wall clock and advance by the time since the last tick.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = match self.last {
            Some(prev) => now.duration_since(prev),
            None => Duration::ZERO,
        };
        self.last = Some(now);
        self.advance(elapsed);
    }

    /// Advance by an explicit duration.
    pub fn advance(&mut self, elapsed: Duration) {
        self.time_elapsed = elapsed.as_secs_f64();
        self.frames_this_second += 1;
        self.second_accumulator += self.time_elapsed;
        if self.second_accumulator >= 1.0 {
            self.frame_rate = self.frames_this_second;
            self.frames_this_second = 0;
            self.second_accumulator -= 1.0;
        }
    }

    /// Seconds covered by the most recent tick.
    pub fn time_elapsed(&self) -> f64 {
        self.time_elapsed
    }

    /// Frames counted during the last full second.
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }
}
