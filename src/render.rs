//! Plain-text rendering of board states.
//!
//! The diagram alternates dot rows with cell rows:
//!
//! ```text
//! •───•   •
//! │ 1 │
//! •───•───•
//!     │ 2 │
//! •   •───•
//! ```
//!
//! Dots are always shown; drawn edges are connector glyphs, undrawn edges
//! are blank; claimed cells carry the owner's number, unclaimed cells are
//! blank.

use std::fmt;

use crate::core::edge::{Cell, Edge};
use crate::core::state::GameState;

const DOT: char = '•';
const H_DRAWN: &str = "───";
const H_BLANK: &str = "   ";
const V_DRAWN: char = '│';
const V_BLANK: char = ' ';

/// Render the full board diagram, one trailing newline per board row.
#[must_use]
pub fn render_text(state: &GameState) -> String {
    let mut out = String::new();

    for row in 0..state.height() {
        // Dot row: dots joined by horizontal edges.
        for col in 0..state.width() {
            out.push(DOT);
            if col < state.box_cols() {
                out.push_str(if state.is_edge_drawn(Edge::horizontal(row, col)) {
                    H_DRAWN
                } else {
                    H_BLANK
                });
            }
        }
        out.push('\n');

        // Cell row: vertical edges interleaved with cell owners.
        if row < state.box_rows() {
            for col in 0..state.width() {
                out.push(if state.is_edge_drawn(Edge::vertical(row, col)) {
                    V_DRAWN
                } else {
                    V_BLANK
                });
                if col < state.box_cols() {
                    match state.cell_owner(Cell::new(row, col)) {
                        Some(owner) => {
                            out.push(' ');
                            out.push((b'0' + owner.number()) as char);
                            out.push(' ');
                        }
                        None => out.push_str("   "),
                    }
                }
            }
            out.push('\n');
        }
    }

    out
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_text(self))
    }
}
