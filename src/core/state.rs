//! Game state: the single aggregate the rules operate on.
//!
//! A `GameState` is a value. Rules functions borrow a state and return a
//! fresh one; nothing ever mutates a caller's state in place. The edge and
//! cell grids are persistent, so the copy made for each accepted move
//! shares storage with its predecessor instead of deep-copying.
//!
//! ## Grid shapes
//!
//! Dimensions are counted in dots. A `width` x `height` dot grid has:
//! - horizontal edges: `height` rows x `width - 1` columns
//! - vertical edges: `height - 1` rows x `width` columns
//! - cells (boxes): `height - 1` rows x `width - 1` columns

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::edge::{Cell, Edge, Orientation};
use super::grid::Grid;
use super::player::Player;

/// Default board: a 5x5 dot grid, 4x4 boxes.
pub const DEFAULT_WIDTH: usize = 5;
/// Default board: a 5x5 dot grid, 4x4 boxes.
pub const DEFAULT_HEIGHT: usize = 5;

/// Returned when a game is created with a grid too small to hold a box.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("grid must be at least 2x2 dots, got {width}x{height}")]
pub struct InvalidDimensions {
    pub width: usize,
    pub height: usize,
}

/// Complete state of one game.
///
/// Construct with [`GameState::new`] or [`GameBuilder`], then evolve it
/// through [`crate::rules::apply_move`]. All other operations are
/// read-only queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    width: usize,
    height: usize,
    horizontal: Grid<bool>,
    vertical: Grid<bool>,
    cells: Grid<Option<Player>>,
    current_player: Player,
    scores: [u32; 2],
    extra_turn: bool,
}

impl GameState {
    /// Create an empty state: no edges drawn, no cells claimed, zero
    /// scores, `Player::One` to move.
    ///
    /// Both dimensions must be at least 2 dots; anything smaller cannot
    /// hold a single box.
    pub fn new(width: usize, height: usize) -> Result<Self, InvalidDimensions> {
        if width < 2 || height < 2 {
            return Err(InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            horizontal: Grid::new(height, width - 1, false),
            vertical: Grid::new(height - 1, width, false),
            cells: Grid::new(height - 1, width - 1, None),
            current_player: Player::One,
            scores: [0, 0],
            extra_turn: false,
        })
    }

    // === Dimensions ===

    /// Dot-grid width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Dot-grid height.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows in the box grid (`height - 1`).
    #[must_use]
    pub fn box_rows(&self) -> usize {
        self.height - 1
    }

    /// Columns in the box grid (`width - 1`).
    #[must_use]
    pub fn box_cols(&self) -> usize {
        self.width - 1
    }

    // === Edges ===

    /// Whether `edge` is inside the grid for its orientation.
    #[must_use]
    pub fn contains_edge(&self, edge: Edge) -> bool {
        match edge.orientation {
            Orientation::Horizontal => self.horizontal.contains(edge.row, edge.col),
            Orientation::Vertical => self.vertical.contains(edge.row, edge.col),
        }
    }

    /// Whether `edge` has been drawn. Panics if `edge` is out of range;
    /// callers holding untrusted indices check with
    /// [`crate::rules::is_legal_move`] instead.
    #[must_use]
    pub fn is_edge_drawn(&self, edge: Edge) -> bool {
        match edge.orientation {
            Orientation::Horizontal => *self.horizontal.get(edge.row, edge.col),
            Orientation::Vertical => *self.vertical.get(edge.row, edge.col),
        }
    }

    /// Count of drawn edges, both orientations.
    #[must_use]
    pub fn drawn_edge_count(&self) -> usize {
        self.horizontal.iter().filter(|&&drawn| drawn).count()
            + self.vertical.iter().filter(|&&drawn| drawn).count()
    }

    /// Total edges on this board: `height*(width-1) + (height-1)*width`.
    #[must_use]
    pub fn total_edge_count(&self) -> usize {
        self.height * (self.width - 1) + (self.height - 1) * self.width
    }

    pub(crate) fn draw_edge(&mut self, edge: Edge) {
        match edge.orientation {
            Orientation::Horizontal => self.horizontal.set(edge.row, edge.col, true),
            Orientation::Vertical => self.vertical.set(edge.row, edge.col, true),
        }
    }

    // === Cells ===

    /// Whether `cell` is inside the box grid.
    #[must_use]
    pub fn contains_cell(&self, cell: Cell) -> bool {
        self.cells.contains(cell.row, cell.col)
    }

    /// Owner of `cell`, or `None` while unclaimed. Panics if `cell` is out
    /// of range.
    #[must_use]
    pub fn cell_owner(&self, cell: Cell) -> Option<Player> {
        *self.cells.get(cell.row, cell.col)
    }

    /// Count of claimed cells, both players.
    #[must_use]
    pub fn claimed_cell_count(&self) -> usize {
        self.cells.iter().filter(|owner| owner.is_some()).count()
    }

    pub(crate) fn claim_cell(&mut self, cell: Cell, player: Player) {
        debug_assert!(
            self.cell_owner(cell).is_none(),
            "cell {} claimed twice",
            cell
        );
        self.cells.set(cell.row, cell.col, Some(player));
        self.scores[player.index()] += 1;
    }

    // === Turn and scores ===

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Claimed-cell count for `player`.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    /// True if the most recent move completed at least one cell.
    /// Informational: turn retention is already encoded in
    /// [`GameState::current_player`].
    #[must_use]
    pub fn extra_turn_pending(&self) -> bool {
        self.extra_turn
    }

    pub(crate) fn set_turn(&mut self, player: Player, extra_turn: bool) {
        self.current_player = player;
        self.extra_turn = extra_turn;
    }
}

/// Builder for game setup.
///
/// ## Example
///
/// ```
/// use dots_and_boxes::{GameBuilder, Player};
///
/// let state = GameBuilder::new()
///     .width(3)
///     .height(4)
///     .starting_player(Player::Two)
///     .build()
///     .unwrap();
///
/// assert_eq!(state.box_rows(), 3);
/// assert_eq!(state.box_cols(), 2);
/// assert_eq!(state.current_player(), Player::Two);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GameBuilder {
    width: usize,
    height: usize,
    starting_player: Player,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            starting_player: Player::One,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dot-grid width, at least 2.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Dot-grid height, at least 2.
    #[must_use]
    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Who moves first. Defaults to `Player::One`.
    #[must_use]
    pub fn starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self
    }

    /// Build the empty starting state.
    pub fn build(self) -> Result<GameState, InvalidDimensions> {
        let mut state = GameState::new(self.width, self.height)?;
        state.current_player = self.starting_player;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = GameState::new(5, 5).unwrap();

        assert_eq!(state.width(), 5);
        assert_eq!(state.height(), 5);
        assert_eq!(state.box_rows(), 4);
        assert_eq!(state.box_cols(), 4);
        assert_eq!(state.drawn_edge_count(), 0);
        assert_eq!(state.claimed_cell_count(), 0);
        assert_eq!(state.score(Player::One), 0);
        assert_eq!(state.score(Player::Two), 0);
        assert_eq!(state.current_player(), Player::One);
        assert!(!state.extra_turn_pending());
    }

    #[test]
    fn test_total_edge_count() {
        // 5x5 dots: 5*4 horizontal + 4*5 vertical = 40
        assert_eq!(GameState::new(5, 5).unwrap().total_edge_count(), 40);
        // 2x2 dots: the smallest board has 4 edges
        assert_eq!(GameState::new(2, 2).unwrap().total_edge_count(), 4);
        // Rectangular: 3 wide, 4 tall = 4*2 + 3*3 = 17
        assert_eq!(GameState::new(3, 4).unwrap().total_edge_count(), 17);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            GameState::new(1, 5),
            Err(InvalidDimensions {
                width: 1,
                height: 5
            })
        );
        assert_eq!(
            GameState::new(5, 0),
            Err(InvalidDimensions {
                width: 5,
                height: 0
            })
        );
        assert_eq!(
            GameState::new(1, 1),
            Err(InvalidDimensions {
                width: 1,
                height: 1
            })
        );
    }

    #[test]
    fn test_edge_bounds() {
        let state = GameState::new(3, 4).unwrap();

        // Horizontal: 4 rows x 2 cols
        assert!(state.contains_edge(Edge::horizontal(3, 1)));
        assert!(!state.contains_edge(Edge::horizontal(4, 0)));
        assert!(!state.contains_edge(Edge::horizontal(0, 2)));

        // Vertical: 3 rows x 3 cols
        assert!(state.contains_edge(Edge::vertical(2, 2)));
        assert!(!state.contains_edge(Edge::vertical(3, 0)));
        assert!(!state.contains_edge(Edge::vertical(0, 3)));
    }

    #[test]
    fn test_draw_edge() {
        let mut state = GameState::new(3, 3).unwrap();
        let edge = Edge::vertical(1, 2);

        assert!(!state.is_edge_drawn(edge));
        state.draw_edge(edge);
        assert!(state.is_edge_drawn(edge));
        assert_eq!(state.drawn_edge_count(), 1);
    }

    #[test]
    fn test_claim_cell_updates_score() {
        let mut state = GameState::new(3, 3).unwrap();
        state.claim_cell(Cell::new(0, 1), Player::Two);

        assert_eq!(state.cell_owner(Cell::new(0, 1)), Some(Player::Two));
        assert_eq!(state.cell_owner(Cell::new(0, 0)), None);
        assert_eq!(state.score(Player::Two), 1);
        assert_eq!(state.score(Player::One), 0);
        assert_eq!(state.claimed_cell_count(), 1);
    }

    #[test]
    fn test_builder_defaults() {
        let state = GameBuilder::new().build().unwrap();
        assert_eq!(state.width(), DEFAULT_WIDTH);
        assert_eq!(state.height(), DEFAULT_HEIGHT);
        assert_eq!(state.current_player(), Player::One);
    }

    #[test]
    fn test_builder_rejects_small_grid() {
        let result = GameBuilder::new().width(1).build();
        assert_eq!(
            result,
            Err(InvalidDimensions {
                width: 1,
                height: DEFAULT_HEIGHT
            })
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = GameState::new(3, 3).unwrap();
        let snapshot = state.clone();

        state.draw_edge(Edge::horizontal(0, 0));
        state.claim_cell(Cell::new(0, 0), Player::One);

        assert_eq!(snapshot.drawn_edge_count(), 0);
        assert_eq!(snapshot.claimed_cell_count(), 0);
        assert_ne!(state, snapshot);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut state = GameState::new(4, 3).unwrap();
        state.draw_edge(Edge::horizontal(1, 1));
        state.draw_edge(Edge::vertical(0, 2));
        state.claim_cell(Cell::new(1, 0), Player::One);
        state.set_turn(Player::Two, false);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
