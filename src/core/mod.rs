//! Core primitives: markers, positions, the board, move errors, RNG.

pub mod board;
pub mod error;
pub mod marker;
pub mod position;
pub mod rng;

pub use board::Board;
pub use error::IllegalMoveError;
pub use marker::Marker;
pub use position::Position;
pub use rng::GameRng;
