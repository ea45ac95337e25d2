use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a tile. `0` is the blank.
pub type TileId = u32;

/// Tile identifier of the blank cell.
pub const BLANK: TileId = 0;

/// Smallest supported board order.
pub const MIN_ORDER: usize = 2;
/// Largest supported board order.
pub const MAX_ORDER: usize = 16;

/// Returns whether `order` is a supported board side length.
pub fn is_valid_order(order: usize) -> bool {
    (MIN_ORDER..=MAX_ORDER).contains(&order)
}

/// Error produced when constructing a [`PuzzleSequence`] from raw parts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Board order outside the supported range
    #[error("unsupported board order {0}")]
    InvalidOrder(usize),
    /// State whose length does not match the board order
    #[error("state {index} has {len} cells, expected {expected}")]
    WrongStateLength {
        /// Index of the offending state in the sequence.
        index: usize,
        /// Actual number of cells.
        len: usize,
        /// Number of cells for the board order.
        expected: usize,
    },
}

/// Single board state.
///
/// Index is the cell position in row-major order and the value is the tile
/// occupying that cell.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct BoardState(Vec<TileId>);
impl BoardState {
    /// Constructs a board state from its cells.
    pub fn new(cells: Vec<TileId>) -> Self {
        Self(cells)
    }

    /// Returns the cells in row-major order.
    pub fn cells(&self) -> &[TileId] {
        &self.0
    }
    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Returns whether the state has no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the cell index of the blank, if any.
    pub fn blank_position(&self) -> Option<usize> {
        self.0.iter().position(|&tile| tile == BLANK)
    }
}
impl From<Vec<TileId>> for BoardState {
    fn from(cells: Vec<TileId>) -> Self {
        Self(cells)
    }
}
impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

/// Solution path of one puzzle: an order and the board states to replay.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSequence {
    pub(crate) order: usize,
    pub(crate) states: Vec<BoardState>,
}
impl PuzzleSequence {
    /// Constructs a sequence, checking that every state has `order²` cells.
    pub fn new(order: usize, states: Vec<BoardState>) -> Result<Self, SequenceError> {
        if !is_valid_order(order) {
            return Err(SequenceError::InvalidOrder(order));
        }
        let expected = order * order;
        if let Some((index, state)) = states.iter().find_position(|s| s.len() != expected) {
            return Err(SequenceError::WrongStateLength {
                index,
                len: state.len(),
                expected,
            });
        }
        Ok(Self { order, states })
    }

    /// Returns the board side length.
    pub fn order(&self) -> usize {
        self.order
    }
    /// Returns the number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.order * self.order
    }
    /// Returns the states in replay order.
    pub fn states(&self) -> &[BoardState] {
        &self.states
    }
    /// Returns the state at `step`, if any.
    pub fn state(&self, step: usize) -> Option<&BoardState> {
        self.states.get(step)
    }
    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.states.len()
    }
    /// Returns whether the sequence has no steps.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
