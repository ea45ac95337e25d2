//! Sanity checks for loaded sequences.
//!
//! None of these checks reject anything; the viewer replays whatever was
//! loaded. They exist to point out solver output that could not have come
//! from legal moves.

use serde::Serialize;
use thiserror::Error;

use crate::{BLANK, BoardState, PuzzleSequence, grid_position};

/// Problem found in a sequence.
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// State that does not contain each tile exactly once
    #[error("state {step} is not a permutation of 0..{cell_count}")]
    NotPermutation {
        /// Index of the state in the sequence.
        step: usize,
        /// Number of cells on the board.
        cell_count: usize,
    },
    /// Transition that is not one slide of a tile into the blank
    #[error("step {step} is not a single slide of a tile into the blank")]
    IllegalSlide {
        /// Index of the state reached by the transition.
        step: usize,
    },
}

/// Returns every problem found in `sequence`.
pub fn inspect(sequence: &PuzzleSequence) -> Vec<Diagnostic> {
    let order = sequence.order();
    let cell_count = sequence.cell_count();
    let mut diagnostics = vec![];

    let mut valid = vec![];
    for (step, state) in sequence.states().iter().enumerate() {
        let ok = is_permutation(state, cell_count);
        if !ok {
            diagnostics.push(Diagnostic::NotPermutation { step, cell_count });
        }
        valid.push(ok);
    }

    for (step, pair) in sequence.states().windows(2).enumerate() {
        let step = step + 1;
        // Only compare states that are themselves well-formed.
        if valid[step - 1] && valid[step] && !is_single_slide(order, &pair[0], &pair[1]) {
            diagnostics.push(Diagnostic::IllegalSlide { step });
        }
    }

    diagnostics
}

/// Returns whether `state` contains each of `0..cell_count` exactly once.
pub fn is_permutation(state: &BoardState, cell_count: usize) -> bool {
    if state.len() != cell_count {
        return false;
    }
    let mut seen = vec![false; cell_count];
    for &tile in state.cells() {
        match seen.get_mut(tile as usize) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// Returns whether `to` is reached from `from` by sliding one tile
/// orthogonally into the blank.
pub fn is_single_slide(order: usize, from: &BoardState, to: &BoardState) -> bool {
    if from.len() != to.len() {
        return false;
    }
    let (Some(a), Some(b)) = (from.blank_position(), to.blank_position()) else {
        return false;
    };
    let (ac, ar) = grid_position(order, a);
    let (bc, br) = grid_position(order, b);
    if ac.abs_diff(bc) + ar.abs_diff(br) != 1 {
        return false;
    }

    from.cells()
        .iter()
        .zip(to.cells())
        .enumerate()
        .all(|(i, (&f, &t))| {
            if i == a {
                t == from.cells()[b]
            } else if i == b {
                t == BLANK
            } else {
                f == t
            }
        })
}
