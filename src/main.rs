//! Tower of Hanoi REST server - CLI entry point.

use anyhow::Result;
use clap::Parser;
use hanoi_server::{Cli, Command, DEFAULT_SESSION, Peg, SessionManager, optimal_moves, script};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, host } => serve(host, port).await,
        Command::Solve {
            disks,
            source,
            target,
            helper,
        } => solve(disks, &source, &target, &helper),
    }
}

/// Run the HTTP game server
async fn serve(host: String, port: u16) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting Tower of Hanoi server");

    let sessions = SessionManager::new();
    sessions
        .create_session(DEFAULT_SESSION.to_string())
        .map_err(|e| anyhow::anyhow!(e))?;

    let app = hanoi_server::router(sessions);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!(port, "Server ready at http://{}:{}/hanoi", host, port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Print the optimal move sequence for a clean tower
fn solve(disks: usize, source: &str, target: &str, helper: &str) -> Result<()> {
    let source = parse_peg(source)?;
    let target = parse_peg(target)?;
    let helper = parse_peg(helper)?;
    anyhow::ensure!(
        source != target && source != helper && target != helper,
        "source, target and helper must name three distinct pegs"
    );

    let moves = optimal_moves(disks, source, target, helper);
    println!("{}", script(&moves));

    Ok(())
}

fn parse_peg(s: &str) -> Result<Peg> {
    Peg::parse(s).ok_or_else(|| anyhow::anyhow!("no peg named {} (use A, B, C or 0, 1, 2)", s))
}
