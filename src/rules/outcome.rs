//! Terminal-state detection.
//!
//! Pure functions over a board snapshot, no side effects. Win detection
//! checks the 8 fixed winning lines; draw detection requires a full board
//! with no completed line, so a filled board containing a line is a win,
//! never a draw.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::core::{Board, Marker, Position};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Classification of a board into exactly one game status.
///
/// Derived, never stored: recompute from the board on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The game continues.
    Ongoing,
    /// The given marker completed a line.
    Win(Marker),
    /// Every cell is filled and no line is complete.
    Draw,
}

impl Outcome {
    /// True for `Win` and `Draw`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// The winning marker, if any.
    #[must_use]
    pub fn winner(self) -> Option<Marker> {
        match self {
            Outcome::Win(marker) => Some(marker),
            _ => None,
        }
    }
}

/// True if any winning line is fully occupied by `marker`.
#[must_use]
pub fn has_line(board: &Board, marker: Marker) -> bool {
    LINES.iter().any(|line| {
        line.iter().all(|&i| {
            // LINES indices are in range by construction
            board.get(Position::ALL[i]) == Some(marker)
        })
    })
}

/// True iff the board is full and neither marker has a line.
///
/// The win check comes first: a filled board with a completed line is a
/// win, not a draw.
#[must_use]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !has_line(board, Marker::X) && !has_line(board, Marker::O)
}

/// Classify a board into exactly one [`Outcome`].
///
/// At most one branch fires: a legal board cannot contain completed lines
/// for both markers, and `is_draw` excludes any win.
#[instrument(level = "trace", ret)]
#[must_use]
pub fn classify(board: &Board) -> Outcome {
    if has_line(board, Marker::X) {
        Outcome::Win(Marker::X)
    } else if has_line(board, Marker::O) {
        Outcome::Win(Marker::O)
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
