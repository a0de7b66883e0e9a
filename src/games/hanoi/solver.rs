//! Optimal-solution calculator.
//!
//! A pure function of the disk count and the three peg roles. It
//! never consults or mutates a live board, which keeps it trivially
//! testable and reusable for any hypothetical puzzle size.

use super::peg::Peg;
use serde::Serialize;
use tracing::instrument;

/// One step of an optimal solution: take the top disk of one peg and
/// place it on another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Instruction {
    from: Peg,
    to: Peg,
}

impl Instruction {
    /// Returns the peg the disk is taken from.
    pub fn from_peg(&self) -> Peg {
        self.from
    }

    /// Returns the peg the disk is placed on.
    pub fn to_peg(&self) -> Peg {
        self.to
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move a disk from peg {} to peg {}", self.from, self.to)
    }
}

/// Computes the minimal move sequence relocating a clean `disks`-high
/// tower from `source` to `target` using `helper`.
///
/// Produces exactly `2^disks - 1` instructions (none for zero disks):
/// solve `disks - 1` from source to helper, move the remaining disk to
/// the target, then solve `disks - 1` from helper to target.
#[instrument]
pub fn optimal_moves(disks: usize, source: Peg, target: Peg, helper: Peg) -> Vec<Instruction> {
    let mut moves = Vec::new();
    push_moves(disks, source, target, helper, &mut moves);
    moves
}

fn push_moves(disks: usize, source: Peg, target: Peg, helper: Peg, out: &mut Vec<Instruction>) {
    if disks == 0 {
        return;
    }
    push_moves(disks - 1, source, helper, target, out);
    out.push(Instruction { from: source, to: target });
    push_moves(disks - 1, helper, target, source, out);
}

/// Renders an instruction sequence as one line per move.
pub fn script(moves: &[Instruction]) -> String {
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
