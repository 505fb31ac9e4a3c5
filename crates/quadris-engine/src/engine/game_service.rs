use std::mem;

use tracing::{debug, info, trace};

use crate::{
    EngineError,
    core::{board::Board, point::Point, tetromino::Tetromino},
};

use super::{
    config::GameConfig,
    game_stats::GameStats,
    piece_source::{PieceSource, RandomPieces},
};

/// Owned copy of everything a renderer or a test needs to observe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_piece: Option<Tetromino>,
    pub next_piece: Tetromino,
    pub stats: GameStats,
    pub game_over: bool,
}

/// The rules engine: sole owner of the board and the pieces.
///
/// Every command either succeeds or returns exactly one [`EngineError`].
/// A rejected move or rotation leaves the piece exactly where it was.
///
/// # Lock pipeline
///
/// When the falling piece can no longer move down ([`Self::update`]) or is
/// hard dropped ([`Self::drop_piece`]):
///
/// 1. its cells are written into the board
/// 2. completed lines are cleared and scored
/// 3. if the top row is occupied the game ends
/// 4. otherwise the queued piece becomes the falling piece and a new one is
///    queued; if it does not fit at the spawn position the game ends
///
/// # Example
///
/// ```
/// use quadris_engine::{FixedSequence, GameConfig, GameService, Point, Variant};
///
/// let source = FixedSequence::new([Variant::O]).unwrap();
/// let mut game = GameService::new(GameConfig::default(), source).unwrap();
///
/// game.move_piece(Point::LEFT).unwrap();
/// game.drop_piece().unwrap();
///
/// assert_eq!(game.board().occupied_count(), 4);
/// assert_eq!(game.score(), 0);
/// ```
#[derive(Debug)]
pub struct GameService {
    board: Board,
    current_piece: Option<Tetromino>,
    next_piece: Tetromino,
    source: Box<dyn PieceSource>,
    stats: GameStats,
    game_over: bool,
    spawn_position: Point,
}

impl GameService {
    /// Starts a game, drawing the falling and the queued piece from `source`.
    ///
    /// On a board too small for the first piece the game is over right away.
    pub fn new<S>(config: GameConfig, source: S) -> Result<Self, EngineError>
    where
        S: PieceSource + 'static,
    {
        let board = Board::new(config.width, config.height)?;
        let mut source: Box<dyn PieceSource> = Box::new(source);
        let spawn_position = config.spawn_position();
        let current_piece = Tetromino::new(source.next_variant(), spawn_position);
        let next_piece = Tetromino::new(source.next_variant(), spawn_position);
        let game_over = !board.can_place(&current_piece);
        if game_over {
            info!(
                width = config.width,
                height = config.height,
                "first piece does not fit the board"
            );
        }

        Ok(Self {
            board,
            current_piece: Some(current_piece),
            next_piece,
            source,
            stats: GameStats::new(),
            game_over,
            spawn_position,
        })
    }

    /// Like [`Self::new`], with uniformly random pieces.
    pub fn with_random_pieces(config: GameConfig) -> Result<Self, EngineError> {
        Self::new(config, RandomPieces::new())
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece; `None` once it has been locked into the top row.
    #[must_use]
    pub fn current_piece(&self) -> Option<&Tetromino> {
        self.current_piece.as_ref()
    }

    #[must_use]
    pub fn next_piece(&self) -> &Tetromino {
        &self.next_piece
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.stats.score()
    }

    #[must_use]
    pub fn lines_cleared(&self) -> u64 {
        self.stats.lines_cleared()
    }

    #[must_use]
    pub fn level(&self) -> u64 {
        self.stats.level()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            current_piece: self.current_piece,
            next_piece: self.next_piece,
            stats: self.stats.clone(),
            game_over: self.game_over,
        }
    }

    /// Moves the falling piece by `delta`.
    pub fn move_piece(&mut self, delta: Point) -> Result<(), EngineError> {
        let piece = self.active_piece_mut()?;
        let original = *piece;
        piece.move_by(delta)?;
        self.commit_or_restore(original)
    }

    /// Rotates the falling piece to its next rotation state.
    pub fn rotate_piece(&mut self) -> Result<(), EngineError> {
        let piece = self.active_piece_mut()?;
        let original = *piece;
        piece.rotate()?;
        self.commit_or_restore(original)
    }

    /// Moves the falling piece down as far as it goes and locks it.
    pub fn drop_piece(&mut self) -> Result<(), EngineError> {
        if self.game_over {
            return Err(EngineError::GameOver);
        }
        loop {
            match self.move_piece(Point::DOWN) {
                Ok(()) => {}
                Err(EngineError::InvalidMove) => break,
                Err(e) => return Err(e),
            }
        }
        self.lock_piece()
    }

    /// Advances the game by one tick: the falling piece moves down one row,
    /// or is locked if it cannot.
    pub fn update(&mut self) -> Result<(), EngineError> {
        if self.game_over {
            return Err(EngineError::GameOver);
        }
        match self.move_piece(Point::DOWN) {
            Err(EngineError::InvalidMove) => self.lock_piece(),
            result => result,
        }
    }

    fn active_piece_mut(&mut self) -> Result<&mut Tetromino, EngineError> {
        if self.game_over {
            return Err(EngineError::GameOver);
        }
        self.current_piece.as_mut().ok_or(EngineError::NoPiece)
    }

    fn commit_or_restore(&mut self, original: Tetromino) -> Result<(), EngineError> {
        let piece = self.current_piece.as_mut().ok_or(EngineError::NoPiece)?;
        if self.board.can_place(piece) {
            return Ok(());
        }
        *piece = original;
        Err(EngineError::InvalidMove)
    }

    fn lock_piece(&mut self) -> Result<(), EngineError> {
        let piece = self.current_piece.take().ok_or(EngineError::NoPiece)?;
        if let Err(e) = self.board.place(&piece) {
            self.current_piece = Some(piece);
            return Err(e);
        }

        let lines = self.board.completed_lines();
        if !lines.is_empty() {
            self.board.clear_lines(&lines)?;
        }
        let points = self.stats.record_lock(lines.len());
        debug!(
            variant = %piece.variant(),
            position = %piece.position(),
            lines = lines.len(),
            points,
            score = self.stats.score(),
            level = self.stats.level(),
            "piece locked"
        );

        if self.board.is_game_over() {
            self.game_over = true;
            info!(
                score = self.stats.score(),
                lines = self.stats.lines_cleared(),
                "game over: stack reached the top row"
            );
            return Ok(());
        }

        let queued = self.spawn_piece();
        let promoted = mem::replace(&mut self.next_piece, queued);
        if !self.board.can_place(&promoted) {
            self.game_over = true;
            info!(
                score = self.stats.score(),
                lines = self.stats.lines_cleared(),
                variant = %promoted.variant(),
                "game over: no room to spawn"
            );
        }
        self.current_piece = Some(promoted);
        Ok(())
    }

    fn spawn_piece(&mut self) -> Tetromino {
        let variant = self.source.next_variant();
        trace!(%variant, "queued next piece");
        Tetromino::new(variant, self.spawn_position)
    }
}
