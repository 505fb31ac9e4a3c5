/// Integer 2D position on the board, or a relative move delta.
///
/// X grows to the right and Y grows downward, with `(0, 0)` at the top-left
/// cell of the board.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Add, derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);
    pub const LEFT: Self = Self::new(-1, 0);
    pub const RIGHT: Self = Self::new(1, 0);
    pub const DOWN: Self = Self::new(0, 1);

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise addition, `None` on `i32` overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match (self.x.checked_add(other.x), self.y.checked_add(other.y)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Component-wise addition clamped to the `i32` range.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self::new(self.x.saturating_add(other.x), self.y.saturating_add(other.y))
    }
}
