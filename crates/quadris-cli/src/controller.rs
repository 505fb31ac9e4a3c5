use quadris_engine::{
    EngineError, FixedSequence, GameConfig, GameService, PieceSeed, PieceSource, Point,
    RandomPieces,
};
use tracing::info;

use crate::input::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum SessionState {
    Playing,
    Paused,
    GameOver,
}

/// How new games draw their pieces.
#[derive(Debug, Clone)]
pub(crate) enum PieceOrder {
    /// Uniformly random; a fresh seed per game unless one is given.
    Random { seed: Option<PieceSeed> },
    Fixed(FixedSequence),
}

impl PieceOrder {
    fn source(&self) -> Box<dyn PieceSource> {
        match self {
            Self::Random { seed } => {
                let pieces = seed.map_or_else(RandomPieces::new, RandomPieces::with_seed);
                info!(seed = %pieces.seed(), "using random piece order");
                Box::new(pieces)
            }
            Self::Fixed(sequence) => {
                info!(length = sequence.variants().len(), "using fixed piece order");
                Box::new(sequence.clone())
            }
        }
    }
}

/// Milliseconds between automatic drops: 1000 at level 1, 100 less per
/// level, never below 100.
fn drop_interval_millis(level: u64) -> u64 {
    1000_u64
        .saturating_sub(level.saturating_sub(1) * 100)
        .max(100)
}

fn drop_frames(level: u64, fps: u64) -> u64 {
    (drop_interval_millis(level) * fps / 1000).max(1)
}

/// Turns blocked moves and commands after game over into no-ops.
fn absorb(result: Result<(), EngineError>) -> Result<(), EngineError> {
    match result {
        Err(e) if e.is_control_flow() => Ok(()),
        result => result,
    }
}

/// Drives a [`GameService`] from player commands and frame ticks.
///
/// Gravity is counted in frames: every `drop_frames` ticks the falling piece
/// moves down one row. Errors other than blocked moves and game over are
/// returned to the caller.
#[derive(Debug)]
pub(crate) struct GameController {
    config: GameConfig,
    order: PieceOrder,
    service: GameService,
    paused: bool,
    is_exiting: bool,
    fps: u64,
    drop_frames: u64,
}

impl GameController {
    pub(crate) fn new(config: GameConfig, order: PieceOrder, fps: u64) -> Result<Self, EngineError> {
        let service = GameService::new(config, order.source())?;
        info!(
            width = config.width,
            height = config.height,
            fps,
            "game started"
        );
        Ok(Self {
            config,
            order,
            drop_frames: drop_frames(service.level(), fps),
            service,
            paused: false,
            is_exiting: false,
            fps,
        })
    }

    pub(crate) fn service(&self) -> &GameService {
        &self.service
    }

    pub(crate) fn fps(&self) -> u64 {
        self.fps
    }

    pub(crate) fn state(&self) -> SessionState {
        if self.service.is_game_over() {
            SessionState::GameOver
        } else if self.paused {
            SessionState::Paused
        } else {
            SessionState::Playing
        }
    }

    pub(crate) fn should_exit(&self) -> bool {
        self.is_exiting
    }

    /// Advances one frame, applying gravity when the drop timer runs out.
    pub(crate) fn tick(&mut self) -> Result<(), EngineError> {
        if !self.state().is_playing() {
            return Ok(());
        }
        self.drop_frames = self.drop_frames.saturating_sub(1);
        if self.drop_frames > 0 {
            return Ok(());
        }
        let result = self.service.update();
        self.reset_drop_timer();
        absorb(result)
    }

    pub(crate) fn handle(&mut self, command: Command) -> Result<(), EngineError> {
        let result = match command {
            Command::Quit => {
                info!("quit requested");
                self.is_exiting = true;
                Ok(())
            }
            Command::Restart => self.restart(),
            Command::Pause => {
                self.toggle_pause();
                Ok(())
            }
            _ if !self.state().is_playing() => Ok(()),
            Command::Left => self.service.move_piece(Point::LEFT),
            Command::Right => self.service.move_piece(Point::RIGHT),
            Command::Down => {
                let result = self.service.move_piece(Point::DOWN);
                if result.is_ok() {
                    self.reset_drop_timer();
                }
                result
            }
            Command::Rotate => self.service.rotate_piece(),
            Command::Drop => {
                let result = self.service.drop_piece();
                self.reset_drop_timer();
                result
            }
        };
        absorb(result)
    }

    fn toggle_pause(&mut self) {
        if self.service.is_game_over() {
            return;
        }
        self.paused = !self.paused;
        info!(paused = self.paused, "pause toggled");
    }

    fn restart(&mut self) -> Result<(), EngineError> {
        self.service = GameService::new(self.config, self.order.source())?;
        self.paused = false;
        self.reset_drop_timer();
        info!("game restarted");
        Ok(())
    }

    fn reset_drop_timer(&mut self) {
        self.drop_frames = drop_frames(self.service.level(), self.fps);
    }
}
