//! Turn coordination: applying chosen positions, invoking automated
//! players, and exposing observations to UI collaborators.

pub mod game;

pub use game::{GameSession, GameSessionBuilder, MoveRecord, Phase, TurnReport};
