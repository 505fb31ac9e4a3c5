pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Errors reported by the board, the pieces and the game service.
///
/// [`EngineError::InvalidMove`] and [`EngineError::GameOver`] are ordinary
/// control-flow signals (a blocked move, a finished game). Every other
/// variant means the caller broke a contract and should be escalated.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum EngineError {
    #[display("invalid board size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
    #[display("cell ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },
    #[display("unknown piece variant `{value}`")]
    InvalidType { value: String },
    #[display("piece overlaps occupied or out-of-bounds cells")]
    BlockOccupied,
    #[display("move blocked")]
    InvalidMove,
    #[display("no active piece")]
    NoPiece,
    #[display("rotation state {rotation} does not exist for the {variant} piece")]
    RotationFailed { variant: Variant, rotation: usize },
    #[display("game is over")]
    GameOver,
}

impl EngineError {
    /// Returns `true` for outcomes that are expected during normal play.
    ///
    /// Callers absorb these silently instead of reporting them.
    #[must_use]
    pub fn is_control_flow(&self) -> bool {
        matches!(self, Self::InvalidMove | Self::GameOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_flow_classification() {
        assert!(EngineError::InvalidMove.is_control_flow());
        assert!(EngineError::GameOver.is_control_flow());

        assert!(!EngineError::NoPiece.is_control_flow());
        assert!(!EngineError::BlockOccupied.is_control_flow());
        assert!(!EngineError::InvalidSize { width: 0, height: 20 }.is_control_flow());
        assert!(!EngineError::OutOfBounds { x: -1, y: 0 }.is_control_flow());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EngineError::InvalidSize { width: 0, height: 20 }.to_string(),
            "invalid board size 0x20"
        );
        assert_eq!(
            EngineError::OutOfBounds { x: 10, y: 3 }.to_string(),
            "cell (10, 3) is outside the board"
        );
        assert_eq!(
            EngineError::RotationFailed {
                variant: Variant::T,
                rotation: 7,
            }
            .to_string(),
            "rotation state 7 does not exist for the T piece"
        );
    }
}
