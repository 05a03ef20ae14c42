//! Participants: human, random computer, and optimal computer.

pub mod player;

pub use player::{OpponentMode, Player, PlayerKind, PlayerProfile};
