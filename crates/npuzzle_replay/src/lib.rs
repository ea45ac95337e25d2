//! Replay controller for sliding puzzle solutions, independent of any
//! windowing library.
//!
//! A [`Replay`] owns the loaded sequences and walks through them one state at
//! a time. When it moves on is decided by an [`AdvancePolicy`]: either a fixed
//! schedule ([`TimedAdvance`]) or user input ([`InteractiveAdvance`]).

mod atlas;
mod clock;
mod policy;
mod replay;

#[cfg(test)]
mod tests;

pub use atlas::{TileAtlas, TileVisual};
pub use clock::FrameClock;
pub use policy::{AdvanceMode, AdvancePolicy, InteractiveAdvance, TimedAdvance};
pub use replay::{Cursor, Frame, Phase, Replay, ReplayError, ReplayInput, TilePlacement};
