/// Base points for line clears, indexed by the number of lines cleared at once.
///
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
const SCORE_TABLE: [u64; 5] = [0, 100, 300, 500, 800];

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u64 = 10;

/// Score, line and level progression of a game.
///
/// # Scoring
///
/// A lock that clears `n` lines first adds `n` to the line count and
/// recomputes the level, then awards `SCORE_TABLE[n] * level`. A clear that
/// crosses a level boundary is therefore scored at the new level.
///
/// # Example
///
/// ```
/// use quadris_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.record_lock(4);
///
/// assert_eq!(stats.score(), 800);
/// assert_eq!(stats.lines_cleared(), 4);
/// assert_eq!(stats.level(), 1);
/// assert_eq!(stats.line_clear_counter()[4], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: u64,
    lines_cleared: u64,
    pieces_locked: u64,
    line_clear_counter: [u64; 5],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            lines_cleared: 0,
            pieces_locked: 0,
            line_clear_counter: [0; 5],
        }
    }

    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub const fn lines_cleared(&self) -> u64 {
        self.lines_cleared
    }

    /// Current level, starting at 1 and increasing every 10 lines.
    #[must_use]
    pub const fn level(&self) -> u64 {
        self.lines_cleared / LINES_PER_LEVEL + 1
    }

    #[must_use]
    pub const fn pieces_locked(&self) -> u64 {
        self.pieces_locked
    }

    /// Returns a histogram of locks by number of lines cleared.
    ///
    /// - `[0]`: locks that cleared nothing
    /// - `[1]`..`[4]`: singles, doubles, triples and quads
    #[must_use]
    pub const fn line_clear_counter(&self) -> &[u64; 5] {
        &self.line_clear_counter
    }

    /// Updates the statistics after a piece is locked.
    ///
    /// Returns the points awarded for this lock.
    pub fn record_lock(&mut self, cleared_lines: usize) -> u64 {
        self.pieces_locked += 1;
        if let Some(count) = self.line_clear_counter.get_mut(cleared_lines) {
            *count += 1;
        }
        if cleared_lines == 0 {
            return 0;
        }

        self.lines_cleared += cleared_lines as u64;
        let points = SCORE_TABLE.get(cleared_lines).copied().unwrap_or(0) * self.level();
        self.score += points;
        points
    }
}
