//! Core value types: players, edges, cells, grids, game state.
//!
//! Everything here is plain data. The rules that evolve a state live in
//! [`crate::rules`]; text rendering lives in [`crate::render`].

pub mod edge;
pub mod grid;
pub mod player;
pub mod state;

pub use edge::{Cell, Edge, Orientation};
pub use grid::Grid;
pub use player::Player;
pub use state::{GameBuilder, GameState, InvalidDimensions, DEFAULT_HEIGHT, DEFAULT_WIDTH};
