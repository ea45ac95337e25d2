use npuzzle_core::inspect::inspect;
use npuzzle_core::{InputFormat, LoadError};
use npuzzle_prefs::Preferences;
use npuzzle_replay::{Replay, ReplayError, TileAtlas};
use thiserror::Error;

use crate::assets::{self, AssetError};

/// Error that prevents the viewer window from opening.
#[derive(Error, Debug)]
pub(crate) enum StartupError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Replay(#[from] ReplayError),
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Everything loaded before the window opens.
pub(crate) struct Startup {
    pub replay: Replay,
    pub images: TileAtlas<egui::ColorImage>,
}

/// Loads the solution file and images described by `prefs`.
pub(crate) fn prepare(prefs: &Preferences) -> Result<Startup, StartupError> {
    if prefs.input_format == InputFormat::Flat {
        log::warn!("the flat input format is deprecated; prefer the grouped format");
    }

    let (sequences, warnings) = npuzzle_core::load_file(&prefs.input_file, prefs.input_format)?;
    for warning in &warnings {
        log::warn!("{}: {warning}", prefs.input_file.display());
    }
    for (i, sequence) in sequences.iter().enumerate() {
        for diagnostic in inspect(sequence) {
            log::debug!("puzzle {i}: {diagnostic}");
        }
    }
    log::info!(
        "loaded {} puzzle(s) from {}",
        sequences.len(),
        prefs.input_file.display(),
    );

    let replay = Replay::new(sequences, prefs.advance_policy(), prefs.board_layout())?;
    let images = assets::load_images(prefs)?;

    Ok(Startup { replay, images })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn prefs_in(dir: &Path, puzzle: &str) -> Preferences {
        let input_file = dir.join("puzzle.txt");
        std::fs::write(&input_file, puzzle).unwrap();
        let images_dir = dir.join("images");
        std::fs::create_dir(&images_dir).unwrap();
        image::RgbaImage::new(4, 4)
            .save(images_dir.join("0.png"))
            .unwrap();
        Preferences {
            input_file,
            images_dir,
            ..Preferences::default()
        }
    }

    #[test]
    fn test_prepare() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = prefs_in(dir.path(), "3\n1 2 3 4 5 6 7 8 0\nfinish\n");
        let startup = prepare(&prefs).unwrap();
        assert_eq!(startup.replay.sequences().len(), 1);
        assert_eq!(startup.images.len(), 1);
    }

    #[test]
    fn test_prepare_fatal_errors() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = prefs_in(dir.path(), "3\nfinish\n");
        assert!(matches!(
            prepare(&prefs),
            Err(StartupError::Replay(ReplayError::NoSequences)),
        ));

        let missing = Preferences {
            input_file: dir.path().join("missing.txt"),
            ..prefs.clone()
        };
        assert!(matches!(
            prepare(&missing),
            Err(StartupError::Load(LoadError::SourceUnreadable { .. })),
        ));

        std::fs::write(&prefs.input_file, "2\n1 2 3 0\nfinish\n").unwrap();
        let no_background = Preferences {
            images_dir: dir.path().join("nowhere"),
            ..prefs
        };
        assert!(matches!(
            prepare(&no_background),
            Err(StartupError::Asset(AssetError::BackgroundMissing { .. })),
        ));
    }
}
