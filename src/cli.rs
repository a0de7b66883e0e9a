//! Command-line interface for the Hanoi server.

use clap::{Parser, Subcommand};

/// Tower of Hanoi - REST game server
#[derive(Parser, Debug)]
#[command(name = "hanoi_server")]
#[command(about = "Tower of Hanoi game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Print the optimal move sequence for a clean tower
    Solve {
        /// Number of disks to solve for
        #[arg(short, long, default_value = "3")]
        disks: usize,

        /// Source peg (letter or index)
        #[arg(long, default_value = "A")]
        source: String,

        /// Target peg (letter or index)
        #[arg(long, default_value = "C")]
        target: String,

        /// Helper peg (letter or index)
        #[arg(long, default_value = "B")]
        helper: String,
    },
}
