use quadris_engine::Variant;
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::ui::widgets::style;

/// One board cell, two terminal columns wide.
#[derive(Debug)]
pub(crate) struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub(crate) const WIDTH: u16 = 2;
    pub(crate) const HEIGHT: u16 = 1;

    const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub(crate) const fn empty(show_dots: bool) -> Self {
        if show_dots {
            Self::new(style::EMPTY_DOT, ".")
        } else {
            Self::new(style::EMPTY, "")
        }
    }

    /// A cell of the settled stack.
    pub(crate) const fn locked() -> Self {
        Self::new(style::LOCKED, "")
    }

    pub(crate) const fn piece(variant: Variant) -> Self {
        let style = match variant {
            Variant::I => style::I_BLOCK,
            Variant::O => style::O_BLOCK,
            Variant::S => style::S_BLOCK,
            Variant::Z => style::Z_BLOCK,
            Variant::J => style::J_BLOCK,
            Variant::L => style::L_BLOCK,
            Variant::T => style::T_BLOCK,
        };
        Self::new(style, "")
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill the whole area, not just the cells with the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
