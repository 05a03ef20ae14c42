//! Cell positions on the 3x3 grid.
//!
//! Positions are validated at construction, so a `Position` held anywhere
//! in the engine is always a legal index into the board. Index `i` maps to
//! row `i / 3`, column `i % 3`.

use serde::{Deserialize, Serialize};

use super::error::IllegalMoveError;

/// A validated cell index in `[0, 9)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(u8);

impl Position {
    /// Number of cells on the board.
    pub const COUNT: usize = 9;

    /// All positions in ascending index order.
    pub const ALL: [Position; 9] = [
        Position(0),
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
    ];

    /// Create a position from a raw index.
    ///
    /// Fails with [`IllegalMoveError::OutOfRange`] for indices outside
    /// `[0, 9)`.
    pub fn new(index: usize) -> Result<Self, IllegalMoveError> {
        if index < Self::COUNT {
            Ok(Self(index as u8))
        } else {
            Err(IllegalMoveError::OutOfRange { index })
        }
    }

    /// Get the raw cell index (0-based, row-major).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row of this position (0-2).
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / 3
    }

    /// Column of this position (0-2).
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % 3
    }
}

impl TryFrom<usize> for Position {
    type Error = IllegalMoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
