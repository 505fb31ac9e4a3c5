use anyhow::Context as _;
use crossterm::event::{Event, KeyEventKind};
use quadris_engine::GameConfig;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};
use tracing::{debug, error, info};

use crate::{
    controller::{GameController, PieceOrder},
    input::Command,
    tui::{App, Tui},
    ui::widgets::{GameDisplay, KeyBindingDisplay},
};

/// Interactive single-player game.
#[derive(Debug)]
struct PlayApp {
    controller: GameController,
}

impl App for PlayApp {
    #[expect(clippy::cast_precision_loss)]
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_rate(self.controller.fps() as f64);
    }

    fn should_exit(&self) -> bool {
        self.controller.should_exit()
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) -> anyhow::Result<()> {
        let Some(key) = event.as_key_event() else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        let command = match Command::try_from(key) {
            Ok(command) => command,
            Err(e) => {
                debug!(%e, "ignoring key");
                return Ok(());
            }
        };
        debug!(%command, "command");
        self.controller
            .handle(command)
            .inspect_err(|e| error!(%e, %command, "command failed"))?;
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let game = GameDisplay::new(&self.controller);
        let help = KeyBindingDisplay::new(self.controller.state());

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(game.height()), Constraint::Length(1)])
                .areas(frame.area());
        frame.render_widget(game, main_area);
        frame.render_widget(help, help_area);
    }

    fn update(&mut self, _tui: &mut Tui) -> anyhow::Result<()> {
        self.controller
            .tick()
            .inspect_err(|e| error!(%e, "tick failed"))?;
        Ok(())
    }
}

pub(crate) fn run(config: GameConfig, order: PieceOrder, fps: u64) -> anyhow::Result<()> {
    let controller = GameController::new(config, order, fps).context("failed to start game")?;
    let mut app = PlayApp { controller };

    Tui::new().run(&mut app)?;

    let service = app.controller.service();
    info!(
        score = service.score(),
        lines = service.lines_cleared(),
        level = service.level(),
        "session finished"
    );
    Ok(())
}
