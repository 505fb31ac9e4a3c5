use crate::EngineError;

use super::{point::Point, tetromino::Tetromino};

/// A single row of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    cells: Vec<bool>,
}

impl BoardRow {
    fn empty(width: usize) -> Self {
        Self {
            cells: vec![false; width],
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|&c| c)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| !c)
    }

    fn clear(&mut self) {
        self.cells.fill(false);
    }
}

/// Fixed-size occupancy grid.
///
/// `Board` is the single source of truth for collision decisions: moves,
/// rotations and spawns are all validated with [`Board::can_place`].
///
/// # Coordinate System
///
/// - `(0, 0)` is the top-left cell
/// - X increases rightward (columns), Y increases downward (rows)
/// - Row 0 is the top row; any block there ends the game
///
/// # Example
///
/// ```
/// use quadris_engine::{Board, Point, Tetromino, Variant};
///
/// let mut board = Board::new(10, 20).unwrap();
/// let piece = Tetromino::new(Variant::O, Point::new(3, 17));
///
/// assert!(board.can_place(&piece));
/// board.place(&piece).unwrap();
/// assert!(board.is_occupied(Point::new(4, 18)).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    rows: Vec<BoardRow>,
}

impl Board {
    pub const STANDARD_WIDTH: i32 = 10;
    pub const STANDARD_HEIGHT: i32 = 20;

    /// Creates an empty board.
    ///
    /// Both dimensions must be positive.
    pub fn new(width: i32, height: i32) -> Result<Self, EngineError> {
        let invalid = || EngineError::InvalidSize { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid());
        }
        let width = usize::try_from(width).map_err(|_| invalid())?;
        let height = usize::try_from(height).map_err(|_| invalid())?;
        Ok(Self {
            width,
            height,
            rows: vec![BoardRow::empty(width); height],
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &BoardRow> {
        self.rows.iter()
    }

    /// Number of occupied cells on the whole board.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.cells.iter().filter(|&&c| c).count())
            .sum()
    }

    #[must_use]
    pub fn is_valid_position(&self, point: Point) -> bool {
        self.index(point).is_some()
    }

    pub fn is_occupied(&self, point: Point) -> Result<bool, EngineError> {
        let (x, y) = self.checked_index(point)?;
        Ok(self.rows[y].cells[x])
    }

    pub fn set_block(&mut self, point: Point, occupied: bool) -> Result<(), EngineError> {
        let (x, y) = self.checked_index(point)?;
        self.rows[y].cells[x] = occupied;
        Ok(())
    }

    /// Returns `true` if every block of `piece` is inside the board and on
    /// an empty cell.
    #[must_use]
    pub fn can_place(&self, piece: &Tetromino) -> bool {
        piece
            .blocks()
            .iter()
            .all(|&p| self.index(p).is_some_and(|(x, y)| !self.rows[y].cells[x]))
    }

    /// Marks all cells of `piece` as occupied.
    ///
    /// Fails without touching the grid if the piece cannot be placed.
    pub fn place(&mut self, piece: &Tetromino) -> Result<(), EngineError> {
        if !self.can_place(piece) {
            return Err(EngineError::BlockOccupied);
        }
        for point in piece.blocks() {
            self.set_block(point, true)?;
        }
        Ok(())
    }

    /// Indices of the filled rows, in ascending order.
    #[must_use]
    pub fn completed_lines(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.is_filled())
            .map(|(y, _)| y)
            .collect()
    }

    /// Removes the given rows and shifts the rows above them down.
    ///
    /// Rows are walked from the bottom up: every row that survives moves down
    /// by the number of removed rows beneath it, and as many empty rows as
    /// were removed appear at the top. The row set does not need to be
    /// contiguous or sorted. Nothing is modified if any index is out of
    /// range; the error names the row as `y` with `x` set to 0.
    pub fn clear_lines(&mut self, lines: &[usize]) -> Result<(), EngineError> {
        if let Some(&row) = lines.iter().find(|&&row| row >= self.height) {
            return Err(EngineError::OutOfBounds {
                x: 0,
                y: i32::try_from(row).unwrap_or(i32::MAX),
            });
        }
        if lines.is_empty() {
            return Ok(());
        }

        let mut count = 0;
        for y in (0..self.height).rev() {
            if lines.contains(&y) {
                count += 1;
                continue;
            }
            if count > 0 {
                self.rows.swap(y, y + count);
            }
        }
        for row in &mut self.rows[..count] {
            row.clear();
        }
        Ok(())
    }

    /// Returns `true` if any cell of the top row is occupied.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.rows.first().is_some_and(|row| !row.is_empty())
    }

    fn index(&self, point: Point) -> Option<(usize, usize)> {
        let x = usize::try_from(point.x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(point.y).ok().filter(|&y| y < self.height)?;
        Some((x, y))
    }

    fn checked_index(&self, point: Point) -> Result<(usize, usize), EngineError> {
        self.index(point).ok_or(EngineError::OutOfBounds {
            x: point.x,
            y: point.y,
        })
    }
}
