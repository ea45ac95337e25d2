use std::fmt;

use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::Phase;

/// Decides when the replay leaves its current phase.
pub trait AdvancePolicy: fmt::Debug {
    /// Returns how long the replay stays in `phase` before moving on by
    /// itself, or `None` if only user input can move it on.
    fn hold_duration(&self, phase: Phase) -> Option<Duration>;
    /// Returns whether a click or key press moves the replay out of `phase`.
    fn accepts_input(&self, phase: Phase) -> bool;
}

/// Advances on a fixed schedule and ignores user input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimedAdvance {
    /// How long each state is shown.
    pub step_duration: Duration,
    /// How long the last state of a puzzle stays on screen before the next
    /// puzzle starts.
    pub pause_duration: Duration,
}
impl Default for TimedAdvance {
    fn default() -> Self {
        Self {
            step_duration: Duration::from_millis(250),
            pause_duration: Duration::from_millis(500),
        }
    }
}
impl AdvancePolicy for TimedAdvance {
    fn hold_duration(&self, phase: Phase) -> Option<Duration> {
        match phase {
            Phase::AdvancingStep => Some(self.step_duration),
            Phase::WaitingAfterPuzzle => Some(self.pause_duration),
            Phase::Done => None,
        }
    }

    fn accepts_input(&self, _phase: Phase) -> bool {
        false
    }
}

/// Advances one step per click or key press.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct InteractiveAdvance;
impl AdvancePolicy for InteractiveAdvance {
    fn hold_duration(&self, _phase: Phase) -> Option<Duration> {
        None
    }

    fn accepts_input(&self, phase: Phase) -> bool {
        phase != Phase::Done
    }
}

/// Which [`AdvancePolicy`] to use.
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
pub enum AdvanceMode {
    /// See [`TimedAdvance`].
    #[default]
    Timed,
    /// See [`InteractiveAdvance`].
    Interactive,
}
impl AdvanceMode {
    /// Constructs the policy for this mode. The durations are only used by
    /// [`AdvanceMode::Timed`].
    pub fn policy(self, step_duration: Duration, pause_duration: Duration) -> Box<dyn AdvancePolicy> {
        match self {
            AdvanceMode::Timed => Box::new(TimedAdvance {
                step_duration,
                pause_duration,
            }),
            AdvanceMode::Interactive => Box::new(InteractiveAdvance),
        }
    }
}
