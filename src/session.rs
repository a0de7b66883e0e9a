//! Game session management for the HTTP API.
//!
//! The board itself has no concurrency guard, so sessions are owned by
//! a [`SessionManager`] whose single mutex serializes every mutation.

use crate::games::hanoi::{Board, Move, Peg};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Disk count of a freshly created session's board.
pub const DEFAULT_DISKS: usize = 3;

/// A game session owning exactly one board.
///
/// The session is the facade the request layer talks to: it translates
/// positional peg indices into typed moves and stringifies rejections
/// for the response body.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session ID.
    pub id: SessionId,
    /// The board this session plays on.
    pub board: Board,
}

impl GameSession {
    /// Creates a session with the default starting board.
    #[instrument]
    pub fn new(id: SessionId) -> Self {
        info!(session_id = %id, "Creating new game session");
        let board = Board::with_size(DEFAULT_DISKS).expect("default disk count is nonzero");
        Self { id, board }
    }

    /// Creates a session around a pre-built board.
    pub fn with_board(id: SessionId, board: Board) -> Self {
        Self { id, board }
    }

    /// Makes a move given positional peg indices (A=0, B=1, C=2).
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn make_move(&mut self, from: usize, to: usize) -> Result<(), String> {
        let from = Peg::from_index(from).ok_or_else(|| {
            warn!(index = from, "Unknown source peg index");
            format!("No peg with index {} (valid indices: 0, 1, 2)", from)
        })?;
        let to = Peg::from_index(to).ok_or_else(|| {
            warn!(index = to, "Unknown destination peg index");
            format!("No peg with index {} (valid indices: 0, 1, 2)", to)
        })?;

        let mv = Move::new(from, to).map_err(|e| {
            warn!(%from, %to, error = %e, "Rejected move at construction");
            e.to_string()
        })?;

        self.board.make_move(mv).map_err(|e| {
            warn!(%mv, error = %e, "Invalid move");
            e.to_string()
        })?;

        info!(%mv, solved = self.board.is_solved(), "Move completed successfully");
        Ok(())
    }

    /// Replaces the board with a fresh `disks`-high tower on peg A.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn reset(&mut self, disks: usize) -> Result<(), String> {
        self.board = Board::with_size(disks).map_err(|e| e.to_string())?;
        info!(disks, "Board reset");
        Ok(())
    }

    /// Replaces the board with a random `disks`-disk distribution.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn reset_random(&mut self, disks: usize) -> Result<(), String> {
        self.board = Board::random_with_size(disks).map_err(|e| e.to_string())?;
        info!(disks, board = %self.board, "Board reset to random distribution");
        Ok(())
    }
}

/// Manages all game sessions.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    #[instrument]
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a new game session with the default board.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: SessionId) -> Result<SessionId, String> {
        let mut sessions = self.sessions.lock().unwrap();

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err("Session already exists".to_string());
        }

        sessions.insert(id.clone(), GameSession::new(id.clone()));
        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Gets a copy of a session by ID.
    #[instrument(skip(self))]
    pub fn get_session(&self, id: &str) -> Option<GameSession> {
        let sessions = self.sessions.lock().unwrap();
        let session = sessions.get(id).cloned();

        if session.is_none() {
            debug!(session_id = id, "Session not found");
        }

        session
    }

    /// Inserts or replaces a session.
    #[instrument(skip(self, session), fields(session_id = %session.id))]
    pub fn update_session(&self, session: GameSession) {
        let mut sessions = self.sessions.lock().unwrap();
        sessions.insert(session.id.clone(), session);
        debug!("Session updated");
    }

    /// Lists all active session IDs.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let sessions = self.sessions.lock().unwrap();
        sessions.keys().cloned().collect()
    }

    /// Removes a session, returning whether it existed.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> bool {
        let mut sessions = self.sessions.lock().unwrap();
        let removed = sessions.remove(id).is_some();
        if removed {
            info!(session_id = id, "Removed session");
        }
        removed
    }

    /// Atomically makes a move in a session (thread-safe).
    ///
    /// The lock is held across validation and mutation so two
    /// simultaneous requests cannot interleave on one board.
    #[instrument(skip(self))]
    pub fn make_move_atomic(&self, id: &str, from: usize, to: usize) -> Result<(), String> {
        let mut sessions = self.sessions.lock().unwrap();

        let session = sessions
            .get_mut(id)
            .ok_or_else(|| "Session not found".to_string())?;

        session.make_move(from, to)
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
