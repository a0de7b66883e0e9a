//! HTTP request layer for the Tower of Hanoi API.
//!
//! Thin glue over the session facade: maps query parameters to session
//! calls and renders outcomes as plain text or JSON. Every rejection
//! comes back as a 4xx with a descriptive message; nothing here can
//! crash the process.

use crate::games::hanoi::{self, Board, Peg};
use crate::session::{DEFAULT_DISKS, GameSession, SessionManager};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::Router;
use serde::Deserialize;
use tracing::{info, instrument, warn};

/// Session targeted when a request names none.
pub const DEFAULT_SESSION: &str = "default";

/// Upper bound for the solver route's disk count. The instruction list
/// doubles per disk, so this caps the response body.
pub const MAX_SOLVER_DISKS: usize = 16;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
struct AppState {
    sessions: SessionManager,
}

/// Builds the API router over the given session manager.
pub fn router(sessions: SessionManager) -> Router {
    Router::new()
        .route("/hanoi", get(welcome))
        .route("/hanoi/move", post(make_move))
        .route("/hanoi/bestMove", get(best_move))
        .route("/hanoi/currentState", get(current_state))
        .route("/hanoi/new", post(new_game))
        .route("/hanoi/session", delete(remove_session))
        .with_state(AppState { sessions })
}

async fn welcome() -> &'static str {
    "Welcome to the Tower of Hanoi API!"
}

#[derive(Debug, Deserialize)]
struct MoveParams {
    from: usize,
    to: usize,
    session: Option<String>,
}

#[instrument(skip(state))]
async fn make_move(
    State(state): State<AppState>,
    Query(params): Query<MoveParams>,
) -> Result<&'static str, (StatusCode, String)> {
    let session_id = params.session.as_deref().unwrap_or(DEFAULT_SESSION);

    state
        .sessions
        .make_move_atomic(session_id, params.from, params.to)
        .map_err(|message| {
            warn!(session_id, message, "Move rejected");
            (StatusCode::BAD_REQUEST, message)
        })?;

    Ok("Move successful.")
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BestMoveParams {
    num_disks: Option<usize>,
    source: Option<usize>,
    target: Option<usize>,
    helper: Option<usize>,
}

#[instrument]
async fn best_move(
    Query(params): Query<BestMoveParams>,
) -> Result<String, (StatusCode, String)> {
    let disks = params.num_disks.unwrap_or(DEFAULT_DISKS);
    if disks == 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "numDisks must be at least 1".to_string(),
        ));
    }
    if disks > MAX_SOLVER_DISKS {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("numDisks is capped at {}", MAX_SOLVER_DISKS),
        ));
    }

    let source = peg_param("source", params.source, Peg::A)?;
    let target = peg_param("target", params.target, Peg::C)?;
    let helper = peg_param("helper", params.helper, Peg::B)?;
    if source == target || source == helper || target == helper {
        return Err((
            StatusCode::BAD_REQUEST,
            "source, target and helper must name three distinct pegs".to_string(),
        ));
    }

    let moves = hanoi::optimal_moves(disks, source, target, helper);
    info!(disks, %source, %target, %helper, steps = moves.len(), "Computed optimal move sequence");
    Ok(hanoi::script(&moves))
}

/// Resolves an optional peg-index parameter, falling back to the
/// default role for that parameter.
fn peg_param(
    name: &str,
    index: Option<usize>,
    default: Peg,
) -> Result<Peg, (StatusCode, String)> {
    match index {
        None => Ok(default),
        Some(index) => Peg::from_index(index).ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                format!("{} index {} is out of range (valid indices: 0, 1, 2)", name, index),
            )
        }),
    }
}

#[derive(Debug, Deserialize)]
struct SessionParams {
    session: Option<String>,
}

#[instrument(skip(state))]
async fn current_state(
    State(state): State<AppState>,
    Query(params): Query<SessionParams>,
) -> Result<Json<Board>, (StatusCode, String)> {
    let session_id = params.session.as_deref().unwrap_or(DEFAULT_SESSION);

    let session = state.sessions.get_session(session_id).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            format!("No session named {}", session_id),
        )
    })?;

    Ok(Json(session.board))
}

#[derive(Debug, Deserialize)]
struct NewGameParams {
    disks: Option<usize>,
    random: Option<bool>,
    session: Option<String>,
}

#[instrument(skip(state))]
async fn new_game(
    State(state): State<AppState>,
    Query(params): Query<NewGameParams>,
) -> Result<String, (StatusCode, String)> {
    let disks = params.disks.unwrap_or(DEFAULT_DISKS);
    let random = params.random.unwrap_or(false);

    let board = if random {
        Board::random_with_size(disks)
    } else {
        Board::with_size(disks)
    }
    .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let session_id = params
        .session
        .unwrap_or_else(|| DEFAULT_SESSION.to_string());

    match state.sessions.get_session(&session_id) {
        Some(mut session) => {
            session.board = board;
            state.sessions.update_session(session);
        }
        None => {
            state
                .sessions
                .update_session(GameSession::with_board(session_id.clone(), board));
        }
    }

    info!(session_id, disks, random, "Started new game");
    Ok(format!("New game with {} disks.", disks))
}

#[derive(Debug, Deserialize)]
struct RemoveParams {
    session: String,
}

#[instrument(skip(state))]
async fn remove_session(
    State(state): State<AppState>,
    Query(params): Query<RemoveParams>,
) -> Result<&'static str, (StatusCode, String)> {
    if state.sessions.remove_session(&params.session) {
        Ok("Session removed.")
    } else {
        Err((
            StatusCode::NOT_FOUND,
            format!("No session named {}", params.session),
        ))
    }
}
