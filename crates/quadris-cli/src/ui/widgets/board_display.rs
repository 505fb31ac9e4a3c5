use std::iter;

use quadris_engine::{Board, Tetromino};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::ui::widgets::CellDisplay;

/// The settled stack with the falling piece drawn on top.
#[derive(Debug)]
pub(crate) struct BoardDisplay<'a> {
    board: &'a Board,
    falling_piece: Option<&'a Tetromino>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub(crate) fn new(board: &'a Board) -> Self {
        Self {
            board,
            falling_piece: None,
            block: None,
        }
    }

    pub(crate) fn falling_piece(self, piece: Option<&'a Tetromino>) -> Self {
        Self {
            falling_piece: piece,
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
        super::cells_to_u16(self.board.width())
            .saturating_mul(CellDisplay::WIDTH)
            .saturating_add(super::block_horizontal_margin(self.block.as_ref()))
    }

    pub(crate) fn height(&self) -> u16 {
        super::cells_to_u16(self.board.height())
            .saturating_mul(CellDisplay::HEIGHT)
            .saturating_add(super::block_vertical_margin(self.block.as_ref()))
    }

    fn cells(&self) -> Vec<Vec<CellDisplay>> {
        let mut cells: Vec<Vec<_>> = self
            .board
            .rows()
            .map(|row| {
                row.cells()
                    .iter()
                    .map(|&occupied| {
                        if occupied {
                            CellDisplay::locked()
                        } else {
                            CellDisplay::empty(true)
                        }
                    })
                    .collect()
            })
            .collect();

        if let Some(piece) = self.falling_piece {
            for point in piece.blocks() {
                if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y))
                    && let Some(cell) = cells.get_mut(y).and_then(|row| row.get_mut(x))
                {
                    *cell = CellDisplay::piece(piece.variant());
                }
            }
        }
        cells
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints =
            (0..self.board.width()).map(|_| Constraint::Length(CellDisplay::WIDTH));
        let row_constraints =
            (0..self.board.height()).map(|_| Constraint::Length(CellDisplay::HEIGHT));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_rows = area
            .layout_vec(&vertical)
            .into_iter()
            .map(|row| row.layout_vec(&horizontal));

        for (grid_row, row) in iter::zip(grid_rows, self.cells()) {
            for (grid_cell, cell) in iter::zip(grid_row, &row) {
                Widget::render(cell, grid_cell, buf);
            }
        }
    }
}
