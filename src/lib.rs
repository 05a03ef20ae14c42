//! # ttt-engine
//!
//! A two-player 3x3 tic-tac-toe engine: board state, terminal detection,
//! turn alternation, and provably optimal move selection via exhaustive
//! minimax search.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: No rendering or input capture. A collaborator feeds
//!    the session cell choices and polls observations (board snapshot,
//!    current mover identity, terminal verdict) after each accepted move.
//!
//! 2. **Derived Turn State**: Whose turn it is follows from marker counts
//!    on the board, never from a stored field. All mutation is funneled
//!    through `Board::place` so the alternation invariant is enforced
//!    structurally.
//!
//! 3. **Copy-On-Recurse Search**: The board is a `Copy` value, so the
//!    minimax engine explores hypothetical moves on copies and the live
//!    game state is never mutated mid-search.
//!
//! ## Modules
//!
//! - `core`: Markers, positions, the board, move errors, RNG
//! - `rules`: Outcome classification (win/draw/ongoing)
//! - `players`: Human, random, and optimal participants
//! - `minimax`: Exhaustive game-tree search for the optimal player
//! - `session`: Turn coordination, opponent modes, restart

pub mod core;
pub mod rules;
pub mod players;
pub mod minimax;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Board, GameRng, IllegalMoveError, Marker, Position};

pub use crate::rules::{classify, has_line, is_draw, Outcome};

pub use crate::players::{OpponentMode, Player, PlayerKind, PlayerProfile};

pub use crate::minimax::{MinimaxSearch, SearchStats, WIN_SCORE};

pub use crate::session::{
    GameSession, GameSessionBuilder, MoveRecord, Phase, TurnReport,
};
