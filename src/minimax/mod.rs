//! Exhaustive game-tree search for the optimal computer player.

pub mod search;
pub mod stats;

pub use search::{MinimaxSearch, WIN_SCORE};
pub use stats::SearchStats;
