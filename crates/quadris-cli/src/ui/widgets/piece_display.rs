use std::iter;

use quadris_engine::{Point, Tetromino, Variant};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::CellDisplay;

/// A single piece in its spawn orientation, trimmed to its occupied rows
/// and columns.
#[derive(Debug)]
pub(crate) struct PieceDisplay<'a> {
    piece: Option<Variant>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PieceDisplay<'a> {
    pub(crate) fn new() -> Self {
        Self {
            piece: None,
            block: None,
        }
    }

    pub(crate) fn piece(self, piece: Variant) -> Self {
        Self {
            piece: Some(piece),
            ..self
        }
    }

    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub(crate) fn width(&self) -> u16 {
        4 * CellDisplay::WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    pub(crate) fn height(&self) -> u16 {
        2 * CellDisplay::HEIGHT + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let Some(variant) = self.piece else {
            Widget::render(&CellDisplay::empty(false), area, buf);
            return;
        };

        let shape = Tetromino::new(variant, Point::ZERO).shape();
        let rows: Vec<_> = shape.iter().filter(|row| row.contains(&true)).collect();
        let cols: Vec<_> = (0..4)
            .filter(|&x| shape.iter().any(|row| row[x]))
            .collect();

        let piece_area = area.centered(
            Constraint::Length(super::cells_to_u16(cols.len()) * CellDisplay::WIDTH),
            Constraint::Length(super::cells_to_u16(rows.len()) * CellDisplay::HEIGHT),
        );
        let horizontal = Layout::horizontal(
            cols.iter()
                .map(|_| Constraint::Length(CellDisplay::WIDTH)),
        )
        .flex(Flex::Center);
        let vertical = Layout::vertical(
            rows.iter()
                .map(|_| Constraint::Length(CellDisplay::HEIGHT)),
        );

        let occupied = CellDisplay::piece(variant);
        let empty = CellDisplay::empty(false);
        let grid_rows = piece_area
            .layout_vec(&vertical)
            .into_iter()
            .map(|row| row.layout_vec(&horizontal));
        for (grid_row, row) in iter::zip(grid_rows, &rows) {
            for (grid_cell, &x) in iter::zip(grid_row, &cols) {
                let cell = if row[x] { &occupied } else { &empty };
                Widget::render(cell, grid_cell, buf);
            }
        }
    }
}
