//! # dots-and-boxes
//!
//! A rules engine for the pencil-and-paper game
//! [Dots and Boxes](https://en.wikipedia.org/wiki/Dots_and_Boxes):
//! two players alternately draw edges between adjacent dots on a grid;
//! drawing the fourth side of a box claims it and grants another turn;
//! when no edges remain, the player owning more boxes wins.
//!
//! ## Design Principles
//!
//! 1. **States are values**: every operation borrows a `GameState` and
//!    returns an answer or a fresh state. Nothing mutates a caller's
//!    state; hosts hold one state and replace it wholesale on success.
//!
//! 2. **Persistent storage**: the edge and cell grids use `im` vectors,
//!    so the copy made per accepted move is O(1) and shares structure
//!    with its predecessor.
//!
//! 3. **Rejection over panics**: illegal moves come back as `Err` values
//!    with the input state untouched. Rejection is idempotent.
//!
//! The engine is synchronous and does no I/O. Types are plain data and
//! safe to move across threads; sequencing concurrent moves against one
//! logical game is the host's job.
//!
//! ## Modules
//!
//! - `core`: players, edges, cells, grids, game state, game setup
//! - `rules`: legality, box completion, turn transition, outcome
//! - `render`: plain-text board diagrams
//!
//! ## Example
//!
//! ```
//! use dots_and_boxes::{rules, Edge, GameBuilder, GameResult};
//!
//! let state = GameBuilder::new().width(2).height(2).build()?;
//!
//! // Three sides of the only box, then the fourth completes it.
//! let state = rules::apply_move(&state, Edge::horizontal(0, 0))?;
//! let state = rules::apply_move(&state, Edge::horizontal(1, 0))?;
//! let state = rules::apply_move(&state, Edge::vertical(0, 0))?;
//! let state = rules::apply_move(&state, Edge::vertical(0, 1))?;
//!
//! assert!(rules::is_game_over(&state));
//! assert_eq!(rules::winner(&state), GameResult::Winner(state.current_player()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod render;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Cell, Edge, GameBuilder, GameState, Grid, InvalidDimensions, Orientation, Player,
    DEFAULT_HEIGHT, DEFAULT_WIDTH,
};

pub use crate::render::render_text;

pub use crate::rules::{
    apply_move, completed_cells, is_game_over, is_legal_move, legal_moves, winner, GameResult,
    MoveError,
};
