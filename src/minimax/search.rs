//! The minimax search.
//!
//! Full-depth recursion over the remaining board states: at most 9 plies,
//! with branching that shrinks every ply, so no pruning is required. A
//! transposition table memoizes scores as a pure optimization.
//!
//! ## Scoring Policy
//!
//! Terminal boards score `WIN_SCORE - filled` for a maximizer win,
//! `filled - WIN_SCORE` for a loss, and 0 for a draw, where `filled` is
//! the number of occupied cells. Wins stay strictly positive and losses
//! strictly negative at every depth, and the `filled` offset ranks an
//! immediate win above a delayed one and a delayed loss above an immediate
//! one. Because `filled` is a function of the board itself, the score of a
//! position is independent of the path that reached it, which keeps the
//! transposition table sound.

use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use crate::core::{Board, Marker, Position};
use crate::rules::{classify, Outcome};

use super::stats::SearchStats;

/// Base magnitude of a terminal win score. Depth offsets never exceed 9,
/// so adjusted win scores stay positive and loss scores negative.
pub const WIN_SCORE: i32 = 100;

/// Exhaustive minimax search for one maximizing marker.
///
/// Owns a transposition table and per-search statistics. The table keys on
/// the board plus the turn flag, so cached scores stay valid across
/// repeated [`MinimaxSearch::best_move`] calls on the same instance.
pub struct MinimaxSearch {
    maximizer: Marker,
    table: FxHashMap<(Board, bool), i32>,
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a search that maximizes for `maximizer`.
    #[must_use]
    pub fn new(maximizer: Marker) -> Self {
        Self {
            maximizer,
            table: FxHashMap::default(),
            stats: SearchStats::default(),
        }
    }

    /// The marker this search maximizes for.
    #[must_use]
    pub fn maximizer(&self) -> Marker {
        self.maximizer
    }

    /// Statistics for the most recent [`MinimaxSearch::best_move`] call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick the best open position for the maximizer.
    ///
    /// Every open position is scored with the maximizer's marker
    /// hypothetically placed and the opponent replying optimally. Ties
    /// break to the first-encountered index in ascending order. The board
    /// must not already be terminal.
    #[instrument(level = "debug", skip(self), fields(maximizer = %self.maximizer))]
    pub fn best_move(&mut self, board: &Board) -> Position {
        assert_eq!(
            classify(board),
            Outcome::Ongoing,
            "minimax invoked on a terminal board"
        );

        self.stats.reset();
        let start = std::time::Instant::now();

        let mut best: Option<(Position, i32)> = None;
        for position in board.open_positions() {
            let mut child = *board;
            child
                .place(position, self.maximizer)
                .expect("enumerated open positions are placeable");
            let score = self.score_board(child, false);

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((position, score)),
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        let (position, score) = best.expect("an ongoing board has at least one open position");
        debug!(
            %position,
            score,
            nodes = self.stats.nodes_visited,
            cache_hits = self.stats.cache_hits,
            "search complete"
        );
        position
    }

    /// Score a board for the maximizer, assuming optimal play from both
    /// sides.
    ///
    /// `maximizing` says whose hypothetical turn it is: the maximizer's
    /// when true, the opponent's when false.
    pub fn score(&mut self, board: &Board, maximizing: bool) -> i32 {
        self.score_board(*board, maximizing)
    }

    fn score_board(&mut self, board: Board, maximizing: bool) -> i32 {
        self.stats.nodes_visited += 1;

        let filled = board.filled_count() as i32;
        match classify(&board) {
            Outcome::Win(marker) if marker == self.maximizer => return WIN_SCORE - filled,
            Outcome::Win(_) => return filled - WIN_SCORE,
            Outcome::Draw => return 0,
            Outcome::Ongoing => {}
        }

        if let Some(&score) = self.table.get(&(board, maximizing)) {
            self.stats.cache_hits += 1;
            return score;
        }

        let open = board.open_positions();
        if open.is_empty() {
            // Defensive: a full board is classified above
            return 0;
        }

        let mover = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for position in open {
            let mut child = board;
            child
                .place(position, mover)
                .expect("enumerated open positions are placeable");
            let score = self.score_board(child, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        self.table.insert((board, maximizing), best);
        best
    }
}
