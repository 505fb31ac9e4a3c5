use std::str::FromStr;

use arrayvec::ArrayVec;
use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use crate::EngineError;

use super::point::Point;

/// A falling piece: variant, rotation state and anchor position.
///
/// The anchor is the top-left corner of the piece's 4×4 bounding box. Moving
/// and rotating only change the piece's own geometry; checking the result
/// against a [`Board`](super::board::Board) is up to the caller.
///
/// # Example
///
/// ```
/// use quadris_engine::{Point, Tetromino, Variant};
///
/// let mut piece = Tetromino::new(Variant::T, Point::new(3, 0));
/// piece.move_by(Point::DOWN).unwrap();
/// piece.rotate().unwrap();
/// assert_eq!(piece.blocks().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    variant: Variant,
    rotation: usize,
    position: Point,
}

impl Tetromino {
    /// Creates a piece in the variant's first rotation state.
    #[must_use]
    pub const fn new(variant: Variant, position: Point) -> Self {
        Self {
            variant,
            rotation: 0,
            position,
        }
    }

    /// Creates a piece in a specific rotation state.
    pub fn with_rotation(
        variant: Variant,
        rotation: usize,
        position: Point,
    ) -> Result<Self, EngineError> {
        if rotation >= variant.rotation_count() {
            return Err(EngineError::RotationFailed { variant, rotation });
        }
        Ok(Self {
            variant,
            rotation,
            position,
        })
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Index of the current state in the variant's rotation table.
    #[must_use]
    pub fn rotation(&self) -> usize {
        self.rotation
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn shape(&self) -> &'static Shape {
        &self.variant.rotation_states()[self.rotation]
    }

    /// Absolute board coordinates of the four occupied cells.
    #[must_use]
    pub fn blocks(&self) -> ArrayVec<Point, 4> {
        self.variant.rotation_states()[self.rotation]
            .iter()
            .enumerate()
            .flat_map(|(dy, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, cell)| **cell)
                    .map(move |(dx, _)| (dx, dy))
            })
            .map(|(dx, dy)| self.position.saturating_add(offset(dx, dy)))
            .collect()
    }

    /// Translates the anchor by `delta` without any collision check.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMove`] and leaves the anchor unchanged if
    /// the new anchor does not fit in `i32`.
    pub fn move_by(&mut self, delta: Point) -> Result<(), EngineError> {
        self.position = self
            .position
            .checked_add(delta)
            .ok_or(EngineError::InvalidMove)?;
        Ok(())
    }

    /// Advances to the next rotation state, wrapping around.
    ///
    /// Pieces with a single state are left untouched. The anchor never moves;
    /// there is no wall kick.
    pub fn rotate(&mut self) -> Result<(), EngineError> {
        let count = self.variant.rotation_count();
        if self.rotation >= count {
            return Err(EngineError::RotationFailed {
                variant: self.variant,
                rotation: self.rotation,
            });
        }
        self.rotation = (self.rotation + 1) % count;
        Ok(())
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn offset(dx: usize, dy: usize) -> Point {
    // dx and dy index a 4×4 matrix
    Point::new(dx as i32, dy as i32)
}

/// One of the seven piece shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[repr(u8)]
pub enum Variant {
    I = 0,
    O = 1,
    T = 2,
    S = 3,
    Z = 4,
    J = 5,
    L = 6,
}

impl Distribution<Variant> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Variant {
        Variant::ALL[rng.random_range(0..Variant::LEN)]
    }
}

impl TryFrom<u8> for Variant {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| EngineError::InvalidType {
                value: value.to_string(),
            })
    }
}

impl FromStr for Variant {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
        .ok_or_else(|| EngineError::InvalidType {
            value: s.to_owned(),
        })
    }
}

impl Variant {
    /// Number of variants (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        Self::I,
        Self::O,
        Self::T,
        Self::S,
        Self::Z,
        Self::J,
        Self::L,
    ];

    /// Ordered rotation states; [`Tetromino::rotate`] cycles through them.
    #[must_use]
    pub fn rotation_states(self) -> &'static [Shape] {
        match self {
            Self::I => &I_STATES,
            Self::O => &O_STATES,
            Self::T => &T_STATES,
            Self::S => &S_STATES,
            Self::Z => &Z_STATES,
            Self::J => &J_STATES,
            Self::L => &L_STATES,
        }
    }

    #[must_use]
    pub fn rotation_count(self) -> usize {
        self.rotation_states().len()
    }

    /// Returns the single character representation of this variant.
    ///
    /// ```
    /// use quadris_engine::Variant;
    ///
    /// assert_eq!(Variant::I.as_char(), 'I');
    /// assert_eq!(Variant::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::I => 'I',
            Self::O => 'O',
            Self::T => 'T',
            Self::S => 'S',
            Self::Z => 'Z',
            Self::J => 'J',
            Self::L => 'L',
        }
    }

    /// Parses a variant from a single character, ignoring case.
    ///
    /// ```
    /// use quadris_engine::Variant;
    ///
    /// assert_eq!(Variant::from_char('s'), Some(Variant::S));
    /// assert_eq!(Variant::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(Self::I),
            'O' => Some(Self::O),
            'T' => Some(Self::T),
            'S' => Some(Self::S),
            'Z' => Some(Self::Z),
            'J' => Some(Self::J),
            'L' => Some(Self::L),
            _ => None,
        }
    }
}

/// A rotation state as a 4×4 occupancy matrix, indexed `[y][x]`.
pub type Shape = [[bool; 4]; 4];

/// Builds a shape from four 4-character rows where `#` marks a block.
const fn shape(rows: [&[u8; 4]; 4]) -> Shape {
    let mut shape = [[false; 4]; 4];
    let mut y = 0;
    while y < 4 {
        let mut x = 0;
        while x < 4 {
            shape[y][x] = rows[y][x] == b'#';
            x += 1;
        }
        y += 1;
    }
    shape
}

const I_STATES: [Shape; 2] = [
    shape([b"....", b"####", b"....", b"...."]),
    shape([b"..#.", b"..#.", b"..#.", b"..#."]),
];

const O_STATES: [Shape; 1] = [shape([b"....", b".##.", b".##.", b"...."])];

const T_STATES: [Shape; 4] = [
    shape([b"....", b".#..", b"###.", b"...."]),
    shape([b"....", b".#..", b".##.", b".#.."]),
    shape([b"....", b"....", b"###.", b".#.."]),
    shape([b"....", b".#..", b"##..", b".#.."]),
];

const S_STATES: [Shape; 2] = [
    shape([b"....", b".##.", b"##..", b"...."]),
    shape([b"....", b".#..", b".##.", b"..#."]),
];

const Z_STATES: [Shape; 2] = [
    shape([b"....", b"##..", b".##.", b"...."]),
    shape([b"....", b"..#.", b".##.", b".#.."]),
];

const J_STATES: [Shape; 4] = [
    shape([b"....", b"#...", b"###.", b"...."]),
    shape([b"....", b".##.", b".#..", b".#.."]),
    shape([b"....", b"....", b"###.", b"..#."]),
    shape([b"....", b".#..", b".#..", b"##.."]),
];

const L_STATES: [Shape; 4] = [
    shape([b"....", b"..#.", b"###.", b"...."]),
    shape([b"....", b".#..", b".#..", b".##."]),
    shape([b"....", b"....", b"###.", b"#..."]),
    shape([b"....", b"##..", b".#..", b".#.."]),
];

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_rotation_counts() {
        assert_eq!(Variant::I.rotation_count(), 2);
        assert_eq!(Variant::O.rotation_count(), 1);
        assert_eq!(Variant::T.rotation_count(), 4);
        assert_eq!(Variant::S.rotation_count(), 2);
        assert_eq!(Variant::Z.rotation_count(), 2);
        assert_eq!(Variant::J.rotation_count(), 4);
        assert_eq!(Variant::L.rotation_count(), 4);
    }

    #[test]
    fn test_every_state_has_four_blocks() {
        for variant in Variant::ALL {
            for rotation in 0..variant.rotation_count() {
                let piece = Tetromino::with_rotation(variant, rotation, Point::new(3, 0)).unwrap();
                assert_eq!(
                    piece.blocks().len(),
                    4,
                    "{variant} rotation {rotation} should have 4 blocks",
                );
            }
        }
    }

    #[test]
    fn test_states_are_distinct() {
        for variant in Variant::ALL {
            let states = variant.rotation_states();
            for (i, a) in states.iter().enumerate() {
                for b in &states[i + 1..] {
                    assert_ne!(a, b, "{variant} has duplicated rotation states");
                }
            }
        }
    }

    #[test]
    fn test_new_starts_in_first_state() {
        for variant in Variant::ALL {
            let piece = Tetromino::new(variant, Point::new(3, 0));
            assert_eq!(piece.rotation(), 0);
            assert_eq!(piece.shape(), &variant.rotation_states()[0]);
            assert_eq!(piece.position(), Point::new(3, 0));
        }
    }

    #[test]
    fn test_blocks_are_translated() {
        let piece = Tetromino::new(Variant::I, Point::new(3, 0));
        let blocks = piece.blocks();
        assert_eq!(
            blocks.as_slice(),
            &[
                Point::new(3, 1),
                Point::new(4, 1),
                Point::new(5, 1),
                Point::new(6, 1)
            ]
        );

        let piece = Tetromino::new(Variant::T, Point::new(-1, 5));
        assert_eq!(
            piece.blocks().as_slice(),
            &[
                Point::new(0, 6),
                Point::new(-1, 7),
                Point::new(0, 7),
                Point::new(1, 7)
            ]
        );
    }

    #[test]
    fn test_move_by_has_no_bounds_check() {
        let mut piece = Tetromino::new(Variant::O, Point::new(0, 0));
        piece.move_by(Point::new(-10, 3)).unwrap();
        assert_eq!(piece.position(), Point::new(-10, 3));
        piece.move_by(Point::RIGHT).unwrap();
        assert_eq!(piece.position(), Point::new(-9, 3));
    }

    #[test]
    fn test_move_by_overflow_keeps_position() {
        let mut piece = Tetromino::new(Variant::T, Point::new(3, 0));
        assert_eq!(
            piece.move_by(Point::new(i32::MAX, 0)),
            Err(EngineError::InvalidMove)
        );
        assert_eq!(
            piece.move_by(Point::new(0, i32::MIN)),
            Err(EngineError::InvalidMove)
        );
        assert_eq!(piece.position(), Point::new(3, 0));
    }

    #[test]
    fn test_blocks_saturate_near_i32_limits() {
        let piece = Tetromino::new(Variant::O, Point::new(i32::MAX, i32::MAX));
        assert!(
            piece
                .blocks()
                .iter()
                .all(|p| p.x == i32::MAX && p.y == i32::MAX)
        );
    }

    #[test]
    fn test_rotate_o_is_noop() {
        let mut piece = Tetromino::new(Variant::O, Point::new(3, 0));
        let before = piece;
        piece.rotate().unwrap();
        assert_eq!(piece, before);
        assert_eq!(piece.shape(), before.shape());
    }

    #[test]
    fn test_rotate_cycles_back() {
        for variant in Variant::ALL {
            let mut piece = Tetromino::new(variant, Point::new(3, 4));
            let original = piece;
            for _ in 0..variant.rotation_count() {
                piece.rotate().unwrap();
            }
            assert_eq!(piece, original, "{variant} should cycle back");
        }
    }

    #[test]
    fn test_rotate_i_twice() {
        let mut piece = Tetromino::new(Variant::I, Point::new(3, 0));
        let original = *piece.shape();
        piece.rotate().unwrap();
        assert_ne!(*piece.shape(), original);
        assert_eq!(
            piece.blocks().as_slice(),
            &[
                Point::new(5, 0),
                Point::new(5, 1),
                Point::new(5, 2),
                Point::new(5, 3)
            ]
        );
        piece.rotate().unwrap();
        assert_eq!(*piece.shape(), original);
    }

    #[test]
    fn test_rotate_t_four_times() {
        let mut piece = Tetromino::new(Variant::T, Point::new(3, 0));
        let original = *piece.shape();
        for i in 1..4 {
            piece.rotate().unwrap();
            assert_eq!(piece.rotation(), i);
            assert_ne!(*piece.shape(), original);
        }
        piece.rotate().unwrap();
        assert_eq!(piece.rotation(), 0);
        assert_eq!(*piece.shape(), original);
    }

    #[test]
    fn test_rotate_keeps_anchor() {
        let mut piece = Tetromino::new(Variant::L, Point::new(2, 7));
        piece.rotate().unwrap();
        assert_eq!(piece.position(), Point::new(2, 7));
    }

    #[test]
    fn test_with_rotation_rejects_unknown_state() {
        assert_eq!(
            Tetromino::with_rotation(Variant::O, 1, Point::ZERO),
            Err(EngineError::RotationFailed {
                variant: Variant::O,
                rotation: 1,
            })
        );
        assert!(Tetromino::with_rotation(Variant::J, 3, Point::ZERO).is_ok());
    }

    #[test]
    fn test_rotate_rejects_corrupted_state() {
        let mut piece = Tetromino {
            variant: Variant::S,
            rotation: 5,
            position: Point::ZERO,
        };
        assert!(piece.rotate().unwrap_err().is_rotation_failed());
        assert_eq!(piece.rotation(), 5);
    }

    #[test]
    fn test_variant_conversions() {
        for (i, variant) in Variant::ALL.into_iter().enumerate() {
            assert_eq!(Variant::try_from(u8::try_from(i).unwrap()), Ok(variant));
            assert_eq!(Variant::from_char(variant.as_char()), Some(variant));
            assert_eq!(variant.to_string(), variant.as_char().to_string());
        }
        assert!(Variant::try_from(7_u8).unwrap_err().is_invalid_type());

        assert_eq!("z".parse::<Variant>(), Ok(Variant::Z));
        assert_eq!("L".parse::<Variant>(), Ok(Variant::L));
        assert!("".parse::<Variant>().unwrap_err().is_invalid_type());
        assert!("IO".parse::<Variant>().unwrap_err().is_invalid_type());
        assert!("x".parse::<Variant>().unwrap_err().is_invalid_type());
    }

    #[test]
    fn test_uniform_sampling_covers_all_variants() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; Variant::LEN];
        for _ in 0..500 {
            let variant: Variant = rng.random();
            seen[variant as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
