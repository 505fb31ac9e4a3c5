//! Grid, geometry and piece data.
//!
//! - [`Point`] - integer coordinate or move delta
//! - [`Board`] - occupancy grid with collision and line-clear logic
//! - [`Tetromino`] - a piece with its variant, rotation state and anchor

pub use self::{board::*, point::*, tetromino::*};

pub(crate) mod board;
pub(crate) mod point;
pub(crate) mod tetromino;
