//! Recoverable move errors.
//!
//! Every variant is local and state-preserving: a rejected move leaves the
//! board and the session exactly as they were. Programming-contract
//! violations (search on a terminal board, automated move with no open
//! cell) are asserts, not error values.

use thiserror::Error;

use super::marker::Marker;
use super::position::Position;

/// A move that cannot be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalMoveError {
    /// The requested cell index is outside `[0, 9)`.
    #[error("cell index {index} is out of range for a 3x3 board")]
    OutOfRange {
        /// The rejected raw index.
        index: usize,
    },

    /// The requested cell is already occupied.
    #[error("cell {position} is already taken by {by}")]
    Occupied {
        /// The rejected position.
        position: Position,
        /// The marker occupying it.
        by: Marker,
    },

    /// The game has already concluded; restart before moving again.
    #[error("the game is over; no moves are accepted until restart")]
    GameOver,
}
