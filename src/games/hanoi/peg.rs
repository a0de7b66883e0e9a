//! Peg identities for the three rods of the puzzle.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Identifies one of three pegs (rods) holding a stack of disks.
///
/// A peg carries no payload; it acts as an index into the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Peg {
    /// Usually the starting location.
    A,
    /// Usually the auxiliary peg.
    B,
    /// Usually the target location.
    C,
}

impl Peg {
    /// All three pegs, in positional order.
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    /// Creates a peg from its positional index (A=0, B=1, C=2).
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Peg::A),
            1 => Some(Peg::B),
            2 => Some(Peg::C),
            _ => None,
        }
    }

    /// Converts the peg to its positional index.
    pub fn to_index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }

    /// Parses a peg from its letter or positional index.
    #[instrument]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }
        <Peg as strum::IntoEnumIterator>::iter()
            .find(|peg| peg.to_string().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Peg::A => write!(f, "A"),
            Peg::B => write!(f, "B"),
            Peg::C => write!(f, "C"),
        }
    }
}
