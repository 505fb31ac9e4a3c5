use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Tui;

/// Application driven by [`Tui::run`].
///
/// Errors returned from [`App::handle_event`] or [`App::update`] stop the
/// loop and are returned from [`Tui::run`].
pub(crate) trait App {
    /// Called once before the loop starts; configure the tick rate here.
    fn init(&mut self, tui: &mut Tui);

    fn should_exit(&self) -> bool;

    fn handle_event(&mut self, tui: &mut Tui, event: Event) -> anyhow::Result<()>;

    fn draw(&self, frame: &mut Frame);

    /// Called on every tick.
    fn update(&mut self, tui: &mut Tui) -> anyhow::Result<()>;
}
