//! Property tests for the board and classification invariants.

use proptest::prelude::*;

use ttt_engine::{classify, has_line, Board, Marker, Outcome, Position};

/// Build a board by applying a move list with derived turn order, skipping
/// occupied targets and stopping at the first terminal state — i.e. only
/// boards reachable through legal play.
fn reachable_board(moves: &[usize]) -> Board {
    let mut board = Board::new();
    for &index in moves {
        if classify(&board).is_terminal() {
            break;
        }
        let position = Position::new(index).unwrap();
        if !board.is_open(position) {
            continue;
        }
        board.place(position, board.to_move()).unwrap();
    }
    board
}

proptest! {
    /// Strict alternation: X leads O by 0 or 1, and the derived mover is X
    /// exactly when the counts are equal.
    #[test]
    fn alternation_invariant(moves in prop::collection::vec(0..9usize, 0..30)) {
        let board = reachable_board(&moves);
        let x = board.marker_count(Marker::X);
        let o = board.marker_count(Marker::O);

        prop_assert!(x == o || x == o + 1);
        prop_assert_eq!(board.to_move() == Marker::X, x == o);
    }

    /// Classification is exhaustive and mutually exclusive, with win
    /// precedence over draw.
    #[test]
    fn classification_is_exclusive(moves in prop::collection::vec(0..9usize, 0..30)) {
        let board = reachable_board(&moves);
        match classify(&board) {
            Outcome::Win(marker) => {
                prop_assert!(has_line(&board, marker));
                prop_assert!(!has_line(&board, marker.opponent()));
            }
            Outcome::Draw => {
                prop_assert!(board.is_full());
                prop_assert!(!has_line(&board, Marker::X));
                prop_assert!(!has_line(&board, Marker::O));
            }
            Outcome::Ongoing => {
                prop_assert!(!board.is_full());
                prop_assert!(!has_line(&board, Marker::X));
                prop_assert!(!has_line(&board, Marker::O));
            }
        }
    }

    /// Hypothetical placement on a copy leaves the original board
    /// bit-identical — the guarantee the search's backtracking rests on.
    #[test]
    fn copy_placement_round_trip(
        moves in prop::collection::vec(0..9usize, 0..30),
        target in 0..9usize,
    ) {
        let board = reachable_board(&moves);
        let position = Position::new(target).unwrap();
        prop_assume!(board.is_open(position));

        let snapshot = board;
        let mut child = board;
        child.place(position, board.to_move()).unwrap();

        prop_assert_eq!(board, snapshot);
        prop_assert_ne!(child, snapshot);
    }

    /// Re-placing an occupied cell fails and leaves the board unchanged.
    #[test]
    fn occupied_placement_is_rejected(
        moves in prop::collection::vec(0..9usize, 1..30),
        target in 0..9usize,
    ) {
        let mut board = reachable_board(&moves);
        let position = Position::new(target).unwrap();
        prop_assume!(!board.is_open(position));

        let snapshot = board;
        prop_assert!(board.place(position, board.to_move()).is_err());
        prop_assert_eq!(board, snapshot);
    }

    /// Open positions are exactly the unoccupied cells, in ascending
    /// index order.
    #[test]
    fn open_positions_are_sorted_and_complete(moves in prop::collection::vec(0..9usize, 0..30)) {
        let board = reachable_board(&moves);
        let open = board.open_positions();

        prop_assert_eq!(open.len() + board.filled_count(), 9);
        for pair in open.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for position in &open {
            prop_assert!(board.is_open(*position));
        }
    }
}
