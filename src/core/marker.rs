//! Player markers.
//!
//! `X` moves first and corresponds to +1 in the numeric board encoding;
//! `O` corresponds to -1. Cells hold `Option<Marker>` with `None` as empty,
//! so the sum of `value()` over occupied cells determines whose turn it is.

use serde::{Deserialize, Serialize};
use std::ops::Not;

/// One of the two participants' marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// First mover (+1).
    X,
    /// Second mover (-1).
    O,
}

impl Marker {
    /// Numeric encoding: +1 for `X`, -1 for `O`.
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Marker::X => 1,
            Marker::O => -1,
        }
    }

    /// The other marker.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

impl Not for Marker {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::X => write!(f, "X"),
            Marker::O => write!(f, "O"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_opposite() {
        assert_eq!(Marker::X.value(), 1);
        assert_eq!(Marker::O.value(), -1);
        assert_eq!(Marker::X.value() + Marker::O.value(), 0);
    }

    #[test]
    fn test_opponent_round_trip() {
        assert_eq!(Marker::X.opponent(), Marker::O);
        assert_eq!(Marker::O.opponent(), Marker::X);
        assert_eq!(!!Marker::X, Marker::X);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Marker::X), "X");
        assert_eq!(format!("{}", Marker::O), "O");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Marker::X).unwrap();
        let deserialized: Marker = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Marker::X);
    }
}
