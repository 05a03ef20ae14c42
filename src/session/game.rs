//! The game session.
//!
//! A session owns one live board and the two players. It receives position
//! choices from the collaborator, validates and applies them, classifies
//! the result, and — when the next mover is automated — produces the reply
//! synchronously within the same call. Everything the collaborator needs
//! to update a display comes back in the [`TurnReport`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use crate::core::{Board, GameRng, IllegalMoveError, Marker, Position};
use crate::players::{OpponentMode, Player};
use crate::rules::{classify, Outcome};

/// Coordinator state machine.
///
/// `Evaluating` is only held while a move is being processed; between
/// calls the session is either waiting for input or terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a position choice.
    #[default]
    AwaitingMove,
    /// Classifying the board after a placement.
    Evaluating,
    /// Win or draw reached; only restart is accepted.
    Terminal,
}

/// One placed marker, in order of application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The marker that was placed.
    pub marker: Marker,
    /// Where it was placed.
    pub position: Position,
}

/// The observable result of one accepted position choice.
///
/// Holds every move applied during the call — the chosen one, plus the
/// automated reply when the opponent is a computer — and the outcome the
/// board classified to afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Moves applied, in order.
    pub moves: SmallVec<[MoveRecord; 2]>,
    /// Board classification after the last applied move.
    pub outcome: Outcome,
}

/// Builder for a [`GameSession`].
pub struct GameSessionBuilder {
    opponent: OpponentMode,
    seed: u64,
}

impl Default for GameSessionBuilder {
    fn default() -> Self {
        Self {
            opponent: OpponentMode::default(),
            seed: 42,
        }
    }
}

impl GameSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the non-starting player's variant.
    pub fn opponent_mode(mut self, mode: OpponentMode) -> Self {
        self.opponent = mode;
        self
    }

    /// Seed for the random opponent's RNG.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build the session with an empty board.
    pub fn build(self) -> GameSession {
        GameSession {
            board: Board::new(),
            players: [
                Player::human(Marker::X),
                opponent_player(self.opponent),
            ],
            phase: Phase::AwaitingMove,
            rng: GameRng::new(self.seed),
            history: Vec::new(),
            opponent_mode: self.opponent,
        }
    }
}

fn opponent_player(mode: OpponentMode) -> Player {
    match mode {
        OpponentMode::Human => Player::human(Marker::O),
        OpponentMode::RandomComputer => Player::random(Marker::O),
        OpponentMode::OptimalComputer => Player::optimal(Marker::O),
    }
}

/// Coordinates turns over one live board.
///
/// The starting player is always the human placing `X`; the second player
/// is selected by [`OpponentMode`]. At most one game is live per session.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    phase: Phase,
    rng: GameRng,
    history: Vec<MoveRecord>,
    opponent_mode: OpponentMode,
}

impl Default for GameSession {
    fn default() -> Self {
        GameSessionBuilder::default().build()
    }
}

impl GameSession {
    /// Start configuring a session.
    #[must_use]
    pub fn builder() -> GameSessionBuilder {
        GameSessionBuilder::new()
    }

    /// Request a move at the given cell index for whoever's turn it is.
    ///
    /// On success the report carries every move applied during the call:
    /// the chosen one, plus the automated opponent's reply when the game
    /// continued into a computer turn. On failure nothing changed — the
    /// board, phase, and history are exactly as before.
    #[instrument(level = "debug", skip(self))]
    pub fn choose_position(&mut self, index: usize) -> Result<TurnReport, IllegalMoveError> {
        if self.phase == Phase::Terminal {
            return Err(IllegalMoveError::GameOver);
        }

        let position = Position::new(index)?;
        let mover = self.board.to_move();
        self.board.place(position, mover)?;
        self.phase = Phase::Evaluating;

        let mut report = TurnReport {
            moves: SmallVec::new(),
            outcome: Outcome::Ongoing,
        };
        self.record(&mut report, mover, position);

        loop {
            let outcome = classify(&self.board);
            report.outcome = outcome;

            if outcome.is_terminal() {
                self.phase = Phase::Terminal;
                info!(?outcome, moves = self.history.len(), "game over");
                break;
            }

            let next = self.current_player().clone();
            if !next.is_automated() {
                self.phase = Phase::AwaitingMove;
                break;
            }

            let reply = next
                .select_move(&self.board, &mut self.rng)
                .expect("automated players always produce a move");
            self.board
                .place(reply, next.marker())
                .expect("selected moves target open cells");
            self.record(&mut report, next.marker(), reply);
        }

        Ok(report)
    }

    /// Replace the non-starting player and start over.
    ///
    /// Always a full reset: fresh board, cleared history, fresh players —
    /// never an in-place partial clear.
    #[instrument(level = "debug", skip(self))]
    pub fn set_opponent_mode(&mut self, mode: OpponentMode) {
        self.players[1] = opponent_player(mode);
        self.opponent_mode = mode;
        self.restart();
    }

    /// Reset the board and coordinator state unconditionally.
    #[instrument(level = "debug", skip(self))]
    pub fn restart(&mut self) {
        self.board.reset();
        self.history.clear();
        self.phase = Phase::AwaitingMove;
        info!(mode = ?self.opponent_mode, "session restarted");
    }

    /// Current board snapshot.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinator phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The configured opponent mode.
    #[must_use]
    pub fn opponent_mode(&self) -> OpponentMode {
        self.opponent_mode
    }

    /// Board classification, recomputed on demand.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        classify(&self.board)
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.player_for(self.board.to_move())
    }

    /// The player placing `marker`.
    #[must_use]
    pub fn player_for(&self, marker: Marker) -> &Player {
        if self.players[0].marker() == marker {
            &self.players[0]
        } else {
            &self.players[1]
        }
    }

    /// The winning player, if the game has one.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.outcome().winner().map(|marker| self.player_for(marker))
    }

    /// Moves applied since the last restart, in order.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    fn record(&mut self, report: &mut TurnReport, marker: Marker, position: Position) {
        debug!(%marker, %position, "move applied");
        let record = MoveRecord { marker, position };
        report.moves.push(record);
        self.history.push(record);
    }
}
