use std::path::{Path, PathBuf};

use npuzzle_core::BLANK;
use npuzzle_prefs::Preferences;
use npuzzle_replay::TileAtlas;
use thiserror::Error;

/// Error produced when a required image cannot be loaded.
#[derive(Error, Debug)]
pub(crate) enum AssetError {
    /// The background image is missing or unreadable
    #[error("error loading background image {path:?}: {source}")]
    BackgroundMissing {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Decodes the background and tile images.
///
/// The background is required. Tiles whose image cannot be loaded are left
/// out of the atlas, so they are drawn as placeholders.
pub(crate) fn load_images(prefs: &Preferences) -> Result<TileAtlas<egui::ColorImage>, AssetError> {
    let mut atlas = TileAtlas::new();

    let path = prefs.image_path(BLANK);
    let background =
        decode_image(&path).map_err(|source| AssetError::BackgroundMissing { path, source })?;
    atlas.insert(BLANK, background);

    for tile in 1..=prefs.max_tile_id {
        let path = prefs.image_path(tile);
        match decode_image(&path) {
            Ok(image) => atlas.insert(tile, image),
            Err(e) => log::warn!("Failed to load {path:?}: {e}"),
        }
    }

    log::info!("loaded {} image(s) from {:?}", atlas.len(), prefs.images_dir);
    Ok(atlas)
}

fn decode_image(path: &Path) -> Result<egui::ColorImage, image::ImageError> {
    let image = image::open(path)?.to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw()))
}
