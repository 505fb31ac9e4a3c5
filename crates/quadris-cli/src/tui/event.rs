use crossterm::event::Event as CrosstermEvent;

/// Events produced by the event loop.
#[derive(Debug, Clone, derive_more::From)]
pub(super) enum TuiEvent {
    /// Fixed-rate game update.
    Tick,
    /// Redraw request after a state change.
    Render,
    /// Key input, resize and other terminal events.
    Crossterm(CrosstermEvent),
}
