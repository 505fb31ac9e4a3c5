use std::time::Duration;

use crate::tui::{App, event::TuiEvent, event_loop::EventLoop};

/// Terminal runtime owning the event loop.
#[derive(Default, Debug)]
pub(crate) struct Tui {
    events: EventLoop,
}

impl Tui {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Sets the tick rate in ticks per second.
    pub(crate) fn set_tick_rate(&mut self, rate: f64) {
        self.events
            .set_tick_interval(Duration::from_secs_f64(1.0 / rate));
    }

    /// Runs `app` until it asks to exit or fails.
    ///
    /// - `Tick`: `app.update()`
    /// - `Render`: `app.draw()`
    /// - `Crossterm`: `app.handle_event()`
    pub(crate) fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => app.update(&mut self)?,
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => app.handle_event(&mut self, event)?,
                }
            }
            Ok(())
        })
    }
}
