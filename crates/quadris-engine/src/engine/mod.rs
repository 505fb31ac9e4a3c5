//! Game rules and state management.
//!
//! This module orchestrates the core data structures into a playable game:
//!
//! - [`GameService`] - owns the board and the pieces, applies commands
//! - [`GameStats`] - score, cleared lines and level
//! - [`GameConfig`] - board dimensions and spawn position
//! - [`PieceSource`] - where new pieces come from ([`RandomPieces`], [`FixedSequence`])
//! - [`PieceSeed`] - seed for deterministic random pieces
//!
//! # Game Flow
//!
//! 1. Create a [`GameService`] with a config and a piece source
//! 2. Move and rotate the falling piece; call [`GameService::update`] on every
//!    gravity tick
//! 3. A piece that cannot fall further is locked, lines are cleared and the
//!    next piece spawns
//! 4. Repeat until the stack reaches the top row or a new piece has no room
//!
//! # Example
//!
//! ```
//! use quadris_engine::{EngineError, GameConfig, GameService, Point};
//!
//! let mut game = GameService::with_random_pieces(GameConfig::default()).unwrap();
//!
//! match game.move_piece(Point::LEFT) {
//!     Ok(()) | Err(EngineError::InvalidMove) => {}
//!     Err(e) => panic!("{e}"),
//! }
//! game.drop_piece().unwrap();
//!
//! assert_eq!(game.stats().pieces_locked(), 1);
//! ```

pub use self::{config::*, game_service::*, game_stats::*, piece_source::*};

mod config;
mod game_service;
mod game_stats;
mod piece_source;
