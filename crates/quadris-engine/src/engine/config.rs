use crate::{Board, Point};

/// Board dimensions of a game.
///
/// The spawn position centres the pieces' 4×4 bounding box horizontally on
/// the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: Board::STANDARD_WIDTH,
            height: Board::STANDARD_HEIGHT,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn spawn_position(&self) -> Point {
        Point::new(self.width / 2 - 2, 0)
    }
}
