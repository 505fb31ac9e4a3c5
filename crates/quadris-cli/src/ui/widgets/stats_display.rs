use quadris_engine::GameService;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Text},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::style;

const INNER_WIDTH: u16 = 16;

/// Score, cleared lines and level, one `LABEL value` row each.
pub(crate) struct StatsDisplay<'a> {
    entries: [(&'static str, String); 3],
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub(crate) fn new(service: &GameService) -> Self {
        Self {
            entries: [
                ("SCORE", service.score().to_string()),
                ("LINES", service.lines_cleared().to_string()),
                ("LEVEL", service.level().to_string()),
            ],
            block: None,
        }
    }

    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub(crate) fn width(&self) -> u16 {
        INNER_WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    /// Entries are separated by a blank row.
    pub(crate) fn height(&self) -> u16 {
        super::cells_to_u16(self.entries.len() * 2 - 1)
            + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        let width = usize::from(area.width);

        let mut lines = vec![];
        for (label, value) in &self.entries {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            let pad = width.saturating_sub(label.len() + value.len());
            lines.push(Line::styled(format!("{label}{:pad$}{value}", ""), style::DEFAULT));
        }
        Text::from(lines).render(area, buf);
    }
}
