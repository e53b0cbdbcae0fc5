//! Rules of the game: move legality, box completion, turn transition,
//! terminal detection, and outcome.
//!
//! All functions are pure over `&GameState`. The only one that produces a
//! new state is [`apply_move`]; the rest are queries.

pub mod engine;

pub use engine::{
    apply_move, completed_cells, is_game_over, is_legal_move, legal_moves, winner, GameResult,
    MoveError,
};
