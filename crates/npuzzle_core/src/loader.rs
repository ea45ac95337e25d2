//! Parser for solution files.
//!
//! The primary format is **grouped**: a line holding the board order starts a
//! puzzle, each following line holds one state, and a line `finish` ends the
//! puzzle.
//!
//! ```text
//! 3
//! 1 2 3 4 0 5 7 8 6
//! 1 2 3 4 5 0 7 8 6
//! 1 2 3 4 5 6 7 8 0
//! finish
//! ```
//!
//! The legacy **flat** format has one puzzle per line, written as consecutive
//! 9-tuples for a 3×3 board. The two formats are never mixed; the caller
//! picks one with [`InputFormat`].
//!
//! Malformed rows never abort a load. They are skipped and reported as
//! [`Warning`]s alongside the sequences that did load.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BoardState, PuzzleSequence, TileId, is_valid_order};

/// Line that ends a puzzle in the grouped format.
pub const FINISH: &str = "finish";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Board order used by the flat format.
pub const FLAT_ORDER: usize = 3;

/// Text format of a solution file.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InputFormat {
    /// Order line, one state per line, `finish`.
    #[default]
    Grouped,
    /// One puzzle per line as consecutive 3×3 states.
    ///
    /// Deprecated; kept for files written by older tools.
    Flat,
}

/// Error produced when a solution file cannot be read at all.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("error reading {path:?}: {source}")]
    SourceUnreadable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Recoverable problem found while parsing.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// One-based line number.
    pub line: usize,
    /// What went wrong.
    #[serde(flatten)]
    pub kind: WarningKind,
}
impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

/// Kind of [`Warning`].
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WarningKind {
    /// Row with the wrong number of tiles
    #[error("expected {expected} tiles, found {found}")]
    RowMalformed {
        /// Number of cells for the board order.
        expected: usize,
        /// Number of tokens on the line.
        found: usize,
    },
    /// Token that is not a tile identifier
    #[error("invalid tile {token:?}")]
    InvalidToken {
        /// Offending token.
        token: String,
    },
    /// Order line with an unusable value
    #[error("invalid board order {token:?}")]
    InvalidOrder {
        /// Offending token.
        token: String,
    },
    /// Line that is neither an order line nor inside a puzzle
    #[error("unexpected line outside of a puzzle: {text:?}")]
    UnexpectedLine {
        /// Trimmed contents of the line.
        text: String,
    },
    /// Puzzle with no valid states, which is dropped
    #[error("puzzle of order {order} has no valid states")]
    EmptyPuzzle {
        /// Declared board order.
        order: usize,
    },
    /// End of input inside a puzzle
    #[error("missing `finish` at end of input")]
    MissingFinish,
    /// Tokens left over after the last complete flat-format state
    #[error("{count} trailing tokens ignored")]
    TrailingTokens {
        /// Number of ignored tokens.
        count: usize,
    },
}

/// Reads and parses the solution file at `path`.
pub fn load_file(
    path: impl AsRef<Path>,
    format: InputFormat,
) -> Result<(Vec<PuzzleSequence>, Vec<Warning>), LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::SourceUnreadable {
        path: path.to_owned(),
        source,
    })?;
    // Invalid UTF-8 only spoils the rows it appears in.
    let text = String::from_utf8_lossy(&bytes);
    let (sequences, warnings) = parse(&text, format);
    log::debug!(
        "loaded {} puzzle(s) from {path:?} with {} warning(s)",
        sequences.len(),
        warnings.len(),
    );
    Ok((sequences, warnings))
}

/// Parses the contents of a solution file.
pub fn parse(text: &str, format: InputFormat) -> (Vec<PuzzleSequence>, Vec<Warning>) {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    match format {
        InputFormat::Grouped => parse_grouped(text),
        InputFormat::Flat => parse_flat(text),
    }
}

enum GroupState {
    Outside,
    Inside {
        order: usize,
        states: Vec<BoardState>,
    },
    /// Discarding rows after an invalid order line.
    Skipping,
}

/// Parses the grouped format.
pub fn parse_grouped(text: &str) -> (Vec<PuzzleSequence>, Vec<Warning>) {
    let mut sequences = vec![];
    let mut warnings = vec![];
    let mut state = GroupState::Outside;
    let mut last_line = 0;

    for (i, raw_line) in text.lines().enumerate() {
        let line = i + 1;
        last_line = line;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let is_finish = trimmed == FINISH;

        state = match state {
            GroupState::Outside if is_finish => {
                warnings.push(unexpected_line(line, trimmed));
                GroupState::Outside
            }
            GroupState::Outside => {
                let mut tokens = trimmed.split_whitespace();
                match (tokens.next(), tokens.next()) {
                    (Some(token), None) => match token.parse::<usize>() {
                        Ok(order) if is_valid_order(order) => GroupState::Inside {
                            order,
                            states: vec![],
                        },
                        _ => {
                            warnings.push(Warning {
                                line,
                                kind: WarningKind::InvalidOrder {
                                    token: token.to_owned(),
                                },
                            });
                            GroupState::Skipping
                        }
                    },
                    _ => {
                        warnings.push(unexpected_line(line, trimmed));
                        GroupState::Outside
                    }
                }
            }

            GroupState::Inside { order, states } if is_finish => {
                close_group(order, states, line, &mut sequences, &mut warnings);
                GroupState::Outside
            }
            GroupState::Inside { order, mut states } => {
                match parse_row(trimmed, order * order) {
                    Ok(row) => states.push(row),
                    Err(kind) => warnings.push(Warning { line, kind }),
                }
                GroupState::Inside { order, states }
            }

            GroupState::Skipping if is_finish => GroupState::Outside,
            GroupState::Skipping => GroupState::Skipping,
        };
    }

    if let GroupState::Inside { order, states } = state {
        warnings.push(Warning {
            line: last_line,
            kind: WarningKind::MissingFinish,
        });
        close_group(order, states, last_line, &mut sequences, &mut warnings);
    }

    (sequences, warnings)
}

/// Parses the legacy flat format.
pub fn parse_flat(text: &str) -> (Vec<PuzzleSequence>, Vec<Warning>) {
    let cell_count = FLAT_ORDER * FLAT_ORDER;
    let mut sequences = vec![];
    let mut warnings = vec![];

    for (i, raw_line) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let tiles = match parse_tokens(trimmed) {
            Ok(tiles) => tiles,
            Err(kind) => {
                warnings.push(Warning { line, kind });
                continue;
            }
        };

        let chunks = tiles.chunks_exact(cell_count);
        let remainder = chunks.remainder().len();
        let states: Vec<BoardState> = chunks.map(|chunk| BoardState::new(chunk.to_vec())).collect();

        if remainder != 0 {
            warnings.push(Warning {
                line,
                kind: WarningKind::TrailingTokens { count: remainder },
            });
        }
        if states.is_empty() {
            warnings.push(Warning {
                line,
                kind: WarningKind::EmptyPuzzle { order: FLAT_ORDER },
            });
            continue;
        }
        sequences.push(PuzzleSequence {
            order: FLAT_ORDER,
            states,
        });
    }

    (sequences, warnings)
}

/// Parses one state row, which must have exactly `expected` tiles.
pub fn parse_row(line: &str, expected: usize) -> Result<BoardState, WarningKind> {
    let found = line.split_whitespace().count();
    if found != expected {
        return Err(WarningKind::RowMalformed { expected, found });
    }
    parse_tokens(line).map(BoardState::new)
}

fn parse_tokens(line: &str) -> Result<Vec<TileId>, WarningKind> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<TileId>().map_err(|_| WarningKind::InvalidToken {
                token: token.to_owned(),
            })
        })
        .collect()
}

fn close_group(
    order: usize,
    states: Vec<BoardState>,
    line: usize,
    sequences: &mut Vec<PuzzleSequence>,
    warnings: &mut Vec<Warning>,
) {
    if states.is_empty() {
        warnings.push(Warning {
            line,
            kind: WarningKind::EmptyPuzzle { order },
        });
    } else {
        sequences.push(PuzzleSequence { order, states });
    }
}

fn unexpected_line(line: usize, text: &str) -> Warning {
    Warning {
        line,
        kind: WarningKind::UnexpectedLine {
            text: text.to_owned(),
        },
    }
}
