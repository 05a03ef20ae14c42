//! The player model.
//!
//! A player is an immutable value: display identity (icon, messages), a
//! marker, and a variant tag deciding how moves are produced. Humans have
//! no move selector; the session waits for external input instead of
//! calling into them. Automated variants produce a move synchronously.
//!
//! Players are replaced wholesale when the opponent mode changes, never
//! mutated in place.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, GameRng, Marker, Position};
use crate::minimax::MinimaxSearch;

/// Display identity consumed by UI collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Icon reference shown in the occupied cell.
    pub icon: String,
    /// Prompt shown while waiting on this player.
    pub turn_message: String,
    /// Message shown when this player wins.
    pub win_message: String,
}

impl PlayerProfile {
    /// Default profile for a marker.
    #[must_use]
    pub fn for_marker(marker: Marker) -> Self {
        Self {
            icon: marker.to_string(),
            turn_message: format!("{marker}'s turn"),
            win_message: format!("{marker} wins!"),
        }
    }
}

/// How a player produces moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Waits for externally supplied positions.
    Human,
    /// Uniformly samples an open position.
    Random,
    /// Picks the minimax-optimal position.
    Optimal,
}

/// Opponent selection exposed to the UI collaborator.
///
/// Maps to the [`PlayerKind`] of the non-starting player; changing it
/// always performs a full reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentMode {
    /// Two humans sharing the input surface.
    #[default]
    Human,
    /// Uniformly random legal moves.
    RandomComputer,
    /// Provably optimal minimax moves.
    OptimalComputer,
}

impl OpponentMode {
    /// The player kind this mode selects.
    #[must_use]
    pub fn kind(self) -> PlayerKind {
        match self {
            OpponentMode::Human => PlayerKind::Human,
            OpponentMode::RandomComputer => PlayerKind::Random,
            OpponentMode::OptimalComputer => PlayerKind::Optimal,
        }
    }
}

/// One participant: identity plus an optional move-selection capability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    profile: PlayerProfile,
    marker: Marker,
    kind: PlayerKind,
}

impl Player {
    /// Create a player with an explicit profile.
    #[must_use]
    pub fn new(marker: Marker, kind: PlayerKind, profile: PlayerProfile) -> Self {
        Self {
            profile,
            marker,
            kind,
        }
    }

    /// A human player with the default profile for its marker.
    #[must_use]
    pub fn human(marker: Marker) -> Self {
        Self::new(marker, PlayerKind::Human, PlayerProfile::for_marker(marker))
    }

    /// A random-move computer player.
    #[must_use]
    pub fn random(marker: Marker) -> Self {
        Self::new(marker, PlayerKind::Random, PlayerProfile::for_marker(marker))
    }

    /// An optimal (minimax) computer player.
    #[must_use]
    pub fn optimal(marker: Marker) -> Self {
        Self::new(
            marker,
            PlayerKind::Optimal,
            PlayerProfile::for_marker(marker),
        )
    }

    /// Display identity.
    #[must_use]
    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    /// The marker this player places.
    #[must_use]
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// The move-production variant.
    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// True for the computer variants.
    #[must_use]
    pub fn is_automated(&self) -> bool {
        !matches!(self.kind, PlayerKind::Human)
    }

    /// Select a move on the given board.
    ///
    /// Returns `None` for a human: the caller must wait for external
    /// input. For automated variants the board must have at least one open
    /// position; asking an automated player to move on a full board is a
    /// contract violation.
    pub fn select_move(&self, board: &Board, rng: &mut GameRng) -> Option<Position> {
        match self.kind {
            PlayerKind::Human => None,
            PlayerKind::Random => {
                let open = board.open_positions();
                assert!(
                    !open.is_empty(),
                    "random player asked to move with no open positions"
                );
                let position = *rng.choose(&open).expect("open positions are non-empty");
                debug!(player = %self.marker, %position, "random move selected");
                Some(position)
            }
            PlayerKind::Optimal => {
                let position = MinimaxSearch::new(self.marker).best_move(board);
                debug!(player = %self.marker, %position, "optimal move selected");
                Some(position)
            }
        }
    }
}
