use npuzzle_core::{BLANK, BoardLayout, BoardState, CellRect, PuzzleSequence, TileId};
use thiserror::Error;
use web_time::Duration;

use crate::AdvancePolicy;

/// Error produced when constructing a [`Replay`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// There is nothing to replay
    #[error("no puzzles to replay")]
    NoSequences,
}

/// Phase of a [`Replay`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum Phase {
    /// Showing a state of the current puzzle.
    AdvancingStep,
    /// Showing the last state of a puzzle before moving on to the next one.
    WaitingAfterPuzzle,
    /// Every puzzle has been shown, or the window was closed.
    Done,
}

/// Discrete input that affects a [`Replay`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReplayInput {
    /// Mouse click or key press.
    Advance,
    /// The window is closing.
    Close,
}

/// Position of a [`Replay`] within its sequences.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// Index of the current puzzle.
    pub puzzle: usize,
    /// Index of the current state within the puzzle.
    pub step: usize,
}

/// Tile and where to draw it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TilePlacement {
    /// Tile identifier.
    pub tile: TileId,
    /// Square that the tile occupies.
    pub rect: CellRect,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Position in the sequences.
    pub cursor: Cursor,
    /// Number of states in the current puzzle.
    pub step_count: usize,
    /// Board order of the current puzzle.
    pub order: usize,
    /// Current phase.
    pub phase: Phase,
    /// Tiles to draw. The blank and out-of-range identifiers are omitted.
    pub tiles: Vec<TilePlacement>,
}

/// Replay controller, which walks through the loaded sequences one state at a
/// time.
///
/// The owner feeds it frame time deltas with [`Replay::step()`] and user input
/// with [`Replay::handle_input()`], then draws [`Replay::frame()`].
#[derive(Debug)]
pub struct Replay {
    sequences: Vec<PuzzleSequence>,
    policy: Box<dyn AdvancePolicy>,
    layout: BoardLayout,

    cursor: Cursor,
    phase: Phase,
    /// Time spent in the current phase.
    phase_elapsed: Duration,
}
impl Replay {
    /// Constructs a replay positioned at the first state of the first puzzle.
    ///
    /// Puzzles with no states are skipped. Returns an error if nothing is left
    /// to replay.
    pub fn new(
        mut sequences: Vec<PuzzleSequence>,
        policy: Box<dyn AdvancePolicy>,
        layout: BoardLayout,
    ) -> Result<Self, ReplayError> {
        let total = sequences.len();
        sequences.retain(|seq| !seq.is_empty());
        if sequences.len() < total {
            log::debug!("skipping {} empty puzzle(s)", total - sequences.len());
        }
        if sequences.is_empty() {
            return Err(ReplayError::NoSequences);
        }

        Ok(Self {
            sequences,
            policy,
            layout,

            cursor: Cursor::default(),
            phase: Phase::AdvancingStep,
            phase_elapsed: Duration::ZERO,
        })
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }
    /// Returns whether the replay has finished.
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
    /// Returns the current position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
    /// Returns the sequences being replayed.
    pub fn sequences(&self) -> &[PuzzleSequence] {
        &self.sequences
    }
    /// Returns the current puzzle, or `None` once the replay is done.
    pub fn current_sequence(&self) -> Option<&PuzzleSequence> {
        if self.is_done() {
            return None;
        }
        self.sequences.get(self.cursor.puzzle)
    }
    /// Returns the state on screen, or `None` once the replay is done.
    pub fn current_state(&self) -> Option<&BoardState> {
        self.current_sequence()?.state(self.cursor.step)
    }

    /// Advances time by `delta`. Returns whether the replay must be redrawn.
    ///
    /// At most one transition happens per call, and time left over after a
    /// transition is discarded.
    pub fn step(&mut self, delta: Duration) -> bool {
        if self.is_done() {
            return false;
        }
        self.phase_elapsed += delta;
        match self.policy.hold_duration(self.phase) {
            Some(hold) if self.phase_elapsed >= hold => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Handles user input. Returns whether the replay must be redrawn.
    pub fn handle_input(&mut self, input: ReplayInput) -> bool {
        if self.is_done() {
            return false;
        }
        match input {
            ReplayInput::Advance if self.policy.accepts_input(self.phase) => {
                self.advance();
                true
            }
            ReplayInput::Advance => false,
            ReplayInput::Close => {
                log::debug!("replay closed at {:?}", self.cursor);
                self.phase = Phase::Done;
                true
            }
        }
    }

    /// Returns how long until the replay moves on by itself, or `None` if it
    /// is waiting for input or done.
    pub fn time_until_next_step(&self) -> Option<Duration> {
        if self.is_done() {
            return None;
        }
        let hold = self.policy.hold_duration(self.phase)?;
        Some(hold.saturating_sub(self.phase_elapsed))
    }

    /// Returns the frame to draw, or `None` once the replay is done.
    pub fn frame(&self) -> Option<Frame> {
        let sequence = self.current_sequence()?;
        let state = sequence.state(self.cursor.step)?;
        let order = sequence.order();
        let cell_count = sequence.cell_count();

        let tiles = state
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK && (tile as usize) < cell_count)
            .map(|(index, &tile)| TilePlacement {
                tile,
                rect: self.layout.cell_rect(order, index),
            })
            .collect();

        Some(Frame {
            cursor: self.cursor,
            step_count: sequence.len(),
            order,
            phase: self.phase,
            tiles,
        })
    }

    fn advance(&mut self) {
        self.phase_elapsed = Duration::ZERO;
        let step_count = self.sequences[self.cursor.puzzle].len();

        match self.phase {
            Phase::AdvancingStep if self.cursor.step + 1 < step_count => {
                self.cursor.step += 1;
            }
            Phase::AdvancingStep => self.phase = Phase::WaitingAfterPuzzle,
            Phase::WaitingAfterPuzzle if self.cursor.puzzle + 1 < self.sequences.len() => {
                self.cursor = Cursor {
                    puzzle: self.cursor.puzzle + 1,
                    step: 0,
                };
                self.phase = Phase::AdvancingStep;
            }
            Phase::WaitingAfterPuzzle => self.phase = Phase::Done,
            Phase::Done => (),
        }

        log::trace!("replay is now {} at {:?}", self.phase, self.cursor);
    }
}
