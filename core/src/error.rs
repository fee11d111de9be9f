use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Atom at {0:?} must be unique and inside rows and columns 1-8")]
    InvalidAtomPlacement(Position),
    #[error("Rays must enter from a non-corner border cell, got {0:?}")]
    InvalidEntry(Position),
    #[error("Ray did not terminate within the step limit")]
    TraversalOverrun,
    #[error("Ray left the traversable path at {0:?}")]
    StrayRay(Position),
}

impl GameError {
    /// Whether the caller can simply retry with different input.
    pub const fn is_recoverable(self) -> bool {
        matches!(self, Self::InvalidCoords | Self::InvalidEntry(_))
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
