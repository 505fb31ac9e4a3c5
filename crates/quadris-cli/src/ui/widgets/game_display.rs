use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::{
    controller::{GameController, SessionState},
    ui::widgets::{BoardDisplay, PieceDisplay, StatsDisplay, color, style},
};

/// Full game view: stats on the left, the board in the middle and the next
/// piece on the right, with a popup while paused or after game over.
#[derive(Debug)]
pub(crate) struct GameDisplay<'a> {
    controller: &'a GameController,
    horizontal_padding: u16,
    vertical_padding: u16,
}

impl<'a> GameDisplay<'a> {
    pub(crate) fn new(controller: &'a GameController) -> Self {
        Self {
            controller,
            horizontal_padding: 1,
            vertical_padding: 0,
        }
    }

    /// Rows needed to show the whole view.
    pub(crate) fn height(&self) -> u16 {
        let board = BoardDisplay::new(self.controller.service().board()).block(Block::bordered());
        board.height()
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let service = self.controller.service();
        let state = self.controller.state();
        let block_padding = Padding::symmetric(self.horizontal_padding, self.vertical_padding);
        let border_style = match state {
            SessionState::Playing => color::WHITE,
            SessionState::Paused => color::YELLOW,
            SessionState::GameOver => color::RED,
        };
        let panel = |title: &'static str| {
            Block::bordered()
                .title(Line::from(title).centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style::DEFAULT)
        };

        let game_board = BoardDisplay::new(service.board())
            .falling_piece(service.current_piece())
            .block(
                Block::bordered()
                    .border_style(border_style)
                    .style(style::DEFAULT),
            );
        let next_panel = PieceDisplay::new()
            .piece(service.next_piece().variant())
            .block(panel("NEXT"));
        let stats = StatsDisplay::new(service).block(panel("STATS"));

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(stats.width()),
            Constraint::Length(game_board.width()),
            Constraint::Length(next_panel.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] = Layout::vertical([Constraint::Length(stats.height())]).areas(left_column);
        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(center_column);
        let [next_area] =
            Layout::vertical([Constraint::Length(next_panel.height())]).areas(right_column);

        let game_board_width = game_board.width();
        stats.render(stats_area, buf);
        game_board.render(board_area, buf);
        next_panel.render(next_area, buf);

        let popup = match state {
            SessionState::Playing => None,
            SessionState::Paused => Some(("PAUSED", Style::new().fg(color::BLACK).bg(color::YELLOW))),
            SessionState::GameOver => {
                Some(("GAME OVER", Style::new().fg(color::WHITE).bg(color::RED)))
            }
        };

        if let Some((text, style)) = popup {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let area =
                board_area.centered(Constraint::Length(game_board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
