//! First-class move requests for the Hanoi board.
//!
//! Moves are domain events, not side effects. A move only names two
//! pegs; whether it is legal on a given board is decided when the
//! board applies it.

use super::board::Disk;
use super::peg::Peg;
use serde::Serialize;
use tracing::instrument;

/// A request to transfer the topmost disk of one peg to another.
///
/// Construction rejects a move from a peg to itself, so every `Move`
/// value names two distinct pegs. The remaining ways a move can fail
/// depend on the board and surface when it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    from: Peg,
    to: Peg,
}

impl Move {
    /// Creates a move between two distinct pegs.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SamePeg`] if `from` and `to` are equal.
    #[instrument]
    pub fn new(from: Peg, to: Peg) -> Result<Self, MoveError> {
        if from == to {
            return Err(MoveError::SamePeg(from));
        }
        Ok(Self { from, to })
    }

    /// Returns the peg the disk is taken from.
    pub fn from_peg(&self) -> Peg {
        self.from
    }

    /// Returns the peg the disk is placed on.
    pub fn to_peg(&self) -> Peg {
        self.to
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Ways a move can be rejected, at construction or against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Source and destination name the same peg.
    #[display("Cannot move from peg {} to itself", _0)]
    SamePeg(Peg),

    /// The source peg holds no disks.
    #[display("Cannot move from an empty peg: {}", _0)]
    EmptyPeg(Peg),

    /// The destination's top disk is smaller than the disk being moved.
    #[display("Invalid move: cannot place larger disk {} on smaller disk {}", disk, onto)]
    LargerOnSmaller {
        /// The disk being moved.
        disk: Disk,
        /// The smaller disk it would land on.
        onto: Disk,
    },
}

impl std::error::Error for MoveError {}
