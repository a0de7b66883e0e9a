mod action;
mod board;
mod peg;
mod solver;

pub use action::{Move, MoveError};
pub use board::{Board, BoardError, Disk};
pub use peg::Peg;
pub use solver::{Instruction, optimal_moves, script};
