//! The 9-cell grid.
//!
//! ## Representation
//!
//! Cells are `Option<Marker>` in row-major order. The board is `Copy`, so
//! search code explores hypothetical moves on copies and never needs an
//! undo step: the live board is byte-for-byte untouched by a search.
//!
//! ## Derived Turn State
//!
//! There is no stored "current player" field. The mover is derived from
//! marker counts: `X` moves when both counts are equal, `O` otherwise.
//! Any mutation path other than [`Board::place`] would silently change
//! whose turn it is, which is why no such path exists.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::error::IllegalMoveError;
use super::marker::Marker;
use super::position::Position;

/// A 3x3 tic-tac-toe board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Marker>; 9],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 9] }
    }

    /// Get the cell at a position.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Marker> {
        self.cells[position.index()]
    }

    /// True iff the cell at `position` is empty.
    #[must_use]
    pub fn is_open(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    /// All open positions in ascending index order.
    ///
    /// Used both for uniform random selection and for exhaustive search
    /// enumeration, so the order is part of the contract.
    #[must_use]
    pub fn open_positions(&self) -> SmallVec<[Position; 9]> {
        Position::ALL
            .into_iter()
            .filter(|p| self.is_open(*p))
            .collect()
    }

    /// Place `marker` at `position`.
    ///
    /// Fails with [`IllegalMoveError::Occupied`] if the cell is taken;
    /// the board is left unchanged on failure. Out-of-range targets are
    /// unrepresentable: constructing the [`Position`] already rejected
    /// them.
    pub fn place(&mut self, position: Position, marker: Marker) -> Result<(), IllegalMoveError> {
        match self.get(position) {
            Some(by) => Err(IllegalMoveError::Occupied { position, by }),
            None => {
                self.cells[position.index()] = Some(marker);
                Ok(())
            }
        }
    }

    /// Reset every cell to empty.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Number of cells occupied by `marker`.
    #[must_use]
    pub fn marker_count(&self, marker: Marker) -> usize {
        self.cells.iter().filter(|c| **c == Some(marker)).count()
    }

    /// Total number of occupied cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True iff no cell is open.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// The marker whose turn it is, derived from marker counts.
    ///
    /// `X` moves when both markers have been played equally often,
    /// `O` otherwise.
    #[must_use]
    pub fn to_move(&self) -> Marker {
        if self.marker_count(Marker::X) == self.marker_count(Marker::O) {
            Marker::X
        } else {
            Marker::O
        }
    }
}

impl Index<Position> for Board {
    type Output = Option<Marker>;

    fn index(&self, position: Position) -> &Self::Output {
        &self.cells[position.index()]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks_exact(3).enumerate() {
            for cell in cells {
                match cell {
                    Some(marker) => write!(f, "{marker}")?,
                    None => write!(f, "-")?,
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(i: usize) -> Position {
        Position::new(i).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.filled_count(), 0);
        assert_eq!(board.open_positions().len(), 9);
        assert!(!board.is_full());
        assert_eq!(board.to_move(), Marker::X);
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new();
        board.place(pos(4), Marker::X).unwrap();
        assert_eq!(board.get(pos(4)), Some(Marker::X));
        assert!(!board.is_open(pos(4)));
        assert_eq!(board[pos(4)], Some(Marker::X));
    }

    #[test]
    fn test_place_occupied_fails_and_preserves_board() {
        let mut board = Board::new();
        board.place(pos(3), Marker::O).unwrap();
        let snapshot = board;

        let err = board.place(pos(3), Marker::X).unwrap_err();
        assert_eq!(
            err,
            IllegalMoveError::Occupied {
                position: pos(3),
                by: Marker::O,
            }
        );
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_open_positions_ascending() {
        let mut board = Board::new();
        board.place(pos(0), Marker::X).unwrap();
        board.place(pos(4), Marker::O).unwrap();
        board.place(pos(8), Marker::X).unwrap();

        let open: Vec<usize> = board.open_positions().iter().map(|p| p.index()).collect();
        assert_eq!(open, vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_to_move_alternates() {
        let mut board = Board::new();
        assert_eq!(board.to_move(), Marker::X);

        board.place(pos(0), Marker::X).unwrap();
        assert_eq!(board.to_move(), Marker::O);

        board.place(pos(1), Marker::O).unwrap();
        assert_eq!(board.to_move(), Marker::X);
    }

    #[test]
    fn test_reset_clears_all_cells() {
        let mut board = Board::new();
        board.place(pos(0), Marker::X).unwrap();
        board.place(pos(1), Marker::O).unwrap();

        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(board.to_move(), Marker::X);
    }

    #[test]
    fn test_copy_semantics_leave_original_untouched() {
        let mut board = Board::new();
        board.place(pos(0), Marker::X).unwrap();
        let snapshot = board;

        let mut child = board;
        child.place(pos(1), Marker::O).unwrap();

        assert_eq!(board, snapshot);
        assert_ne!(board, child);
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new();
        board.place(pos(0), Marker::X).unwrap();
        board.place(pos(4), Marker::O).unwrap();
        assert_eq!(format!("{board}"), "X--\n-O-\n---");
    }

    #[test]
    fn test_serialization() {
        let mut board = Board::new();
        board.place(pos(2), Marker::X).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
