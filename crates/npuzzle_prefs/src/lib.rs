//! User preferences for the replay viewer.
//!
//! Preferences are layered: built-in defaults (`default.yaml`), then the user
//! preferences file, then an optional file given on the command line. Command
//! line flags are applied on top by the caller.

#[macro_use]
extern crate lazy_static;

use std::path::{Path, PathBuf};

use npuzzle_core::{BoardLayout, InputFormat, TileId};
use npuzzle_replay::{AdvanceMode, AdvancePolicy};
use serde::{Deserialize, Serialize};

pub mod paths;
mod serde_impl;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

const MIN_WINDOW_SIZE: u32 = 100;
const MAX_FRAME_RATE: u32 = 240;
/// Longest step or pause duration, in seconds.
const MAX_DURATION_SECS: f32 = 3600.0;

lazy_static! {
    /// Built-in default preferences.
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

/// Viewer preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Preferences {
    /// Solution file to replay.
    pub input_file: PathBuf,
    /// Format of the solution file.
    pub input_format: InputFormat,
    /// Directory holding `<id>.png` for each tile; `0.png` is the background.
    pub images_dir: PathBuf,
    /// Largest tile identifier to look for an image for.
    pub max_tile_id: TileId,

    /// Side length of the square window, in logical pixels.
    pub window_size: u32,
    /// Maximum number of repaints per second while animating.
    pub frame_rate: u32,

    /// When to move on to the next state.
    pub advance: AdvanceMode,
    /// Seconds that each state is shown in timed mode.
    pub step_duration: f32,
    /// Seconds that the last state of a puzzle is shown in timed mode.
    pub pause_duration: f32,

    /// Appearance of tiles with no image.
    pub placeholder: PlaceholderStyle,
}
impl Default for Preferences {
    fn default() -> Self {
        DEFAULT_PREFS.clone()
    }
}

/// Appearance of tiles with no image.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct PlaceholderStyle {
    /// Fill color.
    #[serde(with = "crate::serde_impl::hex_color")]
    pub fill: [u8; 3],
    /// Outline color.
    #[serde(with = "crate::serde_impl::hex_color")]
    pub outline: [u8; 3],
    /// Color of the tile number.
    #[serde(with = "crate::serde_impl::hex_color")]
    pub text: [u8; 3],
    /// Outline width, in logical pixels.
    pub outline_width: f32,
}

impl Preferences {
    /// Loads preferences from the defaults, the user preferences file, and
    /// `extra_file` if given. If loading fails, the default preferences are
    /// returned.
    pub fn load(extra_file: Option<&Path>) -> Self {
        lazy_static::initialize(&DEFAULT_PREFS);

        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        match paths::prefs_file() {
            Ok(path) => config = config.add_source(config::File::from(path).required(false)),
            Err(e) => log::warn!("Error locating user preferences: {e}"),
        }

        if let Some(path) = extra_file {
            config = config.add_source(config::File::from(path.to_owned()).required(true));
        }

        config
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .map(Self::validated)
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                Self::default()
            })
    }

    /// Replaces out-of-range values with usable ones.
    pub fn validated(mut self) -> Self {
        if self.window_size < MIN_WINDOW_SIZE {
            log::warn!("window_size {} is too small", self.window_size);
            self.window_size = MIN_WINDOW_SIZE;
        }
        if !(1..=MAX_FRAME_RATE).contains(&self.frame_rate) {
            log::warn!("frame_rate {} is out of range", self.frame_rate);
            self.frame_rate = self.frame_rate.clamp(1, MAX_FRAME_RATE);
        }
        for (name, value, default) in [
            (
                "step_duration",
                &mut self.step_duration,
                DEFAULT_PREFS.step_duration,
            ),
            (
                "pause_duration",
                &mut self.pause_duration,
                DEFAULT_PREFS.pause_duration,
            ),
        ] {
            if !(0.0..=MAX_DURATION_SECS).contains(&*value) {
                log::warn!("{name} {value} is invalid");
                *value = default;
            }
        }
        self
    }

    /// Returns the advance policy selected by these preferences.
    pub fn advance_policy(&self) -> Box<dyn AdvancePolicy> {
        self.advance.policy(
            secs_to_duration(self.step_duration),
            secs_to_duration(self.pause_duration),
        )
    }

    /// Returns the board layout for the window size.
    pub fn board_layout(&self) -> BoardLayout {
        BoardLayout::new(self.window_size as f32)
    }

    /// Returns the minimum time between repaints.
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f32(1.0 / self.frame_rate.max(1) as f32)
    }

    /// Returns the path of the image for `tile`.
    pub fn image_path(&self, tile: TileId) -> PathBuf {
        self.images_dir.join(format!("{tile}.png"))
    }
}

fn secs_to_duration(secs: f32) -> std::time::Duration {
    std::time::Duration::try_from_secs_f32(secs.clamp(0.0, MAX_DURATION_SECS)).unwrap_or_default()
}
