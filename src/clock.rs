use std::thread;
use std::time::{Duration, Instant};

pub trait Clock {
    /// Blocks until the next tick boundary at `rate_hz` ticks per second.
    fn tick(&mut self, rate_hz: u32);
}

/// Fixed-rate ticker that sleeps off whatever is left of the current period.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }
}

fn period(rate_hz: u32) -> Duration {
    Duration::from_secs(1) / rate_hz.max(1)
}

impl Clock for FrameClock {
    fn tick(&mut self, rate_hz: u32) {
        if let Some(last_tick) = self.last_tick {
            let elapsed = last_tick.elapsed();
            let period = period(rate_hz);
            if elapsed < period {
                thread::sleep(period - elapsed);
            }
        }
        self.last_tick = Some(Instant::now());
    }
}
