//! Sliding puzzle solution sequences: data model, file loader, and board
//! layout.
//!
//! Sequences are produced by an external solver and only replayed here, so
//! nothing in this crate knows how to solve a puzzle.

mod board;
pub mod inspect;
mod layout;
pub mod loader;


pub use board::*;
pub use layout::{BoardLayout, CellRect, grid_position};
pub use loader::{InputFormat, LoadError, Warning, WarningKind, load_file, parse};
