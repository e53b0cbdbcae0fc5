//! The move cycle: legality, completion detection, application, terminal
//! detection, outcome.
//!
//! Every function here is pure: it borrows a [`GameState`] and either
//! answers a query or returns a fresh state. [`apply_move`] is the only
//! operation that produces a new state; everything else is read-only.
//!
//! ## Turn rule
//!
//! Completing at least one cell keeps the turn with the mover; otherwise
//! the turn passes. One edge borders at most two cells, so a single move
//! can complete 0, 1, or 2 cells; there is no deeper chain within one
//! move.

use log::{debug, trace};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::edge::{Cell, Edge, Orientation};
use crate::core::player::Player;
use crate::core::state::GameState;

/// Result of a finished game.
///
/// Meaningful once [`is_game_over`] returns true, but callable at any
/// point: it simply compares the scores seen so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Strict score majority.
    Winner(Player),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Returned when [`apply_move`] rejects a move. The input state is
/// untouched (no copy is made on the rejection path) and rejecting the
/// same move again yields the same error.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("edge {edge} is outside the grid")]
    OutOfBounds { edge: Edge },
    #[error("edge {edge} is already drawn")]
    AlreadyDrawn { edge: Edge },
}

/// True iff `edge` is in range for its orientation and not yet drawn.
///
/// This is the single gate in front of [`apply_move`]; it never panics.
/// Out-of-range indices are simply not legal moves.
#[must_use]
pub fn is_legal_move(state: &GameState, edge: Edge) -> bool {
    state.contains_edge(edge) && !state.is_edge_drawn(edge)
}

/// Cells completed by `edge`, in a state where `edge` is already drawn.
///
/// An edge borders at most two cells: above/below for horizontal, left/
/// right for vertical. Each bordering cell that exists and has all four
/// sides drawn is returned. Called on a state where `edge` is still
/// undrawn, this returns nothing: a cell only qualifies once every side
/// is in.
#[must_use]
pub fn completed_cells(state: &GameState, edge: Edge) -> SmallVec<[Cell; 2]> {
    let mut completed = SmallVec::new();

    let candidates: [Option<Cell>; 2] = match edge.orientation {
        Orientation::Horizontal => [
            // Cell above, unless the edge is on the top boundary.
            (edge.row > 0).then(|| Cell::new(edge.row - 1, edge.col)),
            // Cell below, unless on the bottom boundary.
            (edge.row < state.height() - 1).then(|| Cell::new(edge.row, edge.col)),
        ],
        Orientation::Vertical => [
            // Cell to the left, unless on the left boundary.
            (edge.col > 0).then(|| Cell::new(edge.row, edge.col - 1)),
            // Cell to the right, unless on the right boundary.
            (edge.col < state.width() - 1).then(|| Cell::new(edge.row, edge.col)),
        ],
    };

    for cell in candidates.into_iter().flatten() {
        if cell_enclosed(state, cell) {
            completed.push(cell);
        }
    }

    completed
}

/// All four sides of `cell` drawn.
fn cell_enclosed(state: &GameState, cell: Cell) -> bool {
    state.is_edge_drawn(Edge::horizontal(cell.row, cell.col))
        && state.is_edge_drawn(Edge::horizontal(cell.row + 1, cell.col))
        && state.is_edge_drawn(Edge::vertical(cell.row, cell.col))
        && state.is_edge_drawn(Edge::vertical(cell.row, cell.col + 1))
}

/// Apply one move: draw `edge`, claim any completed cells for the mover,
/// and advance the turn.
///
/// On success, returns the next state; the input state is never modified.
/// Completing at least one cell scores one point per cell and keeps the
/// turn with the mover (`extra_turn_pending` set); otherwise the turn
/// flips.
pub fn apply_move(state: &GameState, edge: Edge) -> Result<GameState, MoveError> {
    if !state.contains_edge(edge) {
        trace!("rejected {edge}: out of bounds");
        return Err(MoveError::OutOfBounds { edge });
    }
    if state.is_edge_drawn(edge) {
        trace!("rejected {edge}: already drawn");
        return Err(MoveError::AlreadyDrawn { edge });
    }

    let mover = state.current_player();
    let mut next = state.clone();
    next.draw_edge(edge);

    let completed = completed_cells(&next, edge);
    for &cell in &completed {
        next.claim_cell(cell, mover);
    }

    if completed.is_empty() {
        next.set_turn(mover.opponent(), false);
    } else {
        next.set_turn(mover, true);
    }

    debug!(
        "{mover} drew {edge}, completed {} cell(s), {} to move",
        completed.len(),
        next.current_player()
    );
    Ok(next)
}

/// True iff every edge on the board is drawn.
///
/// Computed from the edge grids directly; on a full board every cell is
/// necessarily claimed as well.
#[must_use]
pub fn is_game_over(state: &GameState) -> bool {
    state.drawn_edge_count() == state.total_edge_count()
}

/// Compare scores: strict majority wins, equality is a draw.
#[must_use]
pub fn winner(state: &GameState) -> GameResult {
    match state.score(Player::One).cmp(&state.score(Player::Two)) {
        std::cmp::Ordering::Greater => GameResult::Winner(Player::One),
        std::cmp::Ordering::Less => GameResult::Winner(Player::Two),
        std::cmp::Ordering::Equal => GameResult::Draw,
    }
}

/// Every undrawn edge, in a fixed order: all horizontal edges row-major,
/// then all vertical edges row-major.
///
/// Empty exactly when [`is_game_over`] is true.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Edge> {
    let mut moves = Vec::with_capacity(state.total_edge_count() - state.drawn_edge_count());

    for row in 0..state.height() {
        for col in 0..state.width() - 1 {
            let edge = Edge::horizontal(row, col);
            if !state.is_edge_drawn(edge) {
                moves.push(edge);
            }
        }
    }
    for row in 0..state.height() - 1 {
        for col in 0..state.width() {
            let edge = Edge::vertical(row, col);
            if !state.is_edge_drawn(edge) {
                moves.push(edge);
            }
        }
    }

    moves
}
