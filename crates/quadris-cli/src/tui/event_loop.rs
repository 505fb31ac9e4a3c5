use std::time::{Duration, Instant};

use crossterm::event;

use crate::tui::event::TuiEvent;

const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000 / 60);

/// Produces ticks at a fixed interval, and a render after every tick or
/// terminal event.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Duration,
    last_tick: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub(super) fn new() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            last_tick: Instant::now(),
            dirty: true, // Initial render is required on startup
        }
    }

    pub(super) fn set_tick_interval(&mut self, interval: Duration) {
        self.tick_interval = interval;
    }

    /// Blocks until the next tick is due, a render is pending or a terminal
    /// event arrives.
    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if now.duration_since(self.last_tick) >= self.tick_interval {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            let timeout = (self.last_tick + self.tick_interval).saturating_duration_since(now);
            if !event::poll(timeout)? {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }
}
