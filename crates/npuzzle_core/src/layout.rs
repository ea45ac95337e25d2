use serde::Serialize;

/// Axis-aligned square occupied by one board cell, in board coordinates.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct CellRect {
    /// Grid column.
    pub column: usize,
    /// Grid row.
    pub row: usize,
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Side length.
    pub size: f32,
}

/// Maps cell indices to on-screen squares for a square board.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoardLayout {
    /// Side length of the whole board.
    pub board_size: f32,
}
impl BoardLayout {
    /// Constructs a layout for a board with the given side length.
    pub fn new(board_size: f32) -> Self {
        Self { board_size }
    }

    /// Returns the side length of one cell on a board of order `order`.
    pub fn tile_size(&self, order: usize) -> f32 {
        self.board_size / order as f32
    }

    /// Returns the square for cell `index` on a board of order `order`.
    ///
    /// Cells are numbered in row-major order, so cell `i` is at column
    /// `i % order` and row `i / order`.
    pub fn cell_rect(&self, order: usize, index: usize) -> CellRect {
        let (column, row) = grid_position(order, index);
        let size = self.tile_size(order);
        CellRect {
            column,
            row,
            x: column as f32 * size,
            y: row as f32 * size,
            size,
        }
    }
}

/// Returns the `(column, row)` of cell `index` on a board of order `order`.
pub fn grid_position(order: usize, index: usize) -> (usize, usize) {
    (index % order, index / order)
}
