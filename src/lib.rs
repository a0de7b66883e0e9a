//! Tower of Hanoi game server library.
//!
//! A classroom Tower of Hanoi exposed through a REST API: an in-memory
//! board model, a recursive optimal-solution calculator, and a thin
//! session layer the HTTP routes call into.
//!
//! # Architecture
//!
//! - **Board model**: three peg stacks with validated construction and
//!   single-disk moves
//! - **Solver**: pure recursive calculator, decoupled from live boards
//! - **Session**: board ownership and lifecycle behind a mutex
//! - **Server**: axum routes mapping queries to session calls
//!
//! # Example
//!
//! ```
//! use hanoi_server::{Board, Move, Peg};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut board = Board::with_size(3)?;
//! board.make_move(Move::new(Peg::A, Peg::C)?)?;
//! assert_eq!(board.peg(Peg::C), &[0]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod games;
mod server;
mod session;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Server
pub use server::{DEFAULT_SESSION, MAX_SOLVER_DISKS, router};

// Crate-level exports - Session management
pub use session::{DEFAULT_DISKS, GameSession, SessionId, SessionManager};

// Crate-level exports - Game types (Tower of Hanoi)
pub use games::hanoi::{
    Board, BoardError, Disk, Instruction, Move, MoveError, Peg, optimal_moves, script,
};
