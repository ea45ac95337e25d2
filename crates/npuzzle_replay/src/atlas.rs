use std::collections::BTreeMap;

use npuzzle_core::{BLANK, TileId};

/// How to draw a tile.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TileVisual<'a, T> {
    /// Loaded image.
    Texture(&'a T),
    /// Flat rectangle with an outline, used when no image is available.
    Placeholder,
}

/// Mapping from tile identifier to loaded image.
///
/// Identifier [`BLANK`] holds the background. Lookups for any identifier
/// without an image yield [`TileVisual::Placeholder`].
#[derive(Debug, Clone)]
pub struct TileAtlas<T> {
    textures: BTreeMap<TileId, T>,
}
impl<T> Default for TileAtlas<T> {
    fn default() -> Self {
        Self {
            textures: BTreeMap::new(),
        }
    }
}
impl<T> FromIterator<(TileId, T)> for TileAtlas<T> {
    fn from_iter<I: IntoIterator<Item = (TileId, T)>>(iter: I) -> Self {
        Self {
            textures: iter.into_iter().collect(),
        }
    }
}
impl<T> TileAtlas<T> {
    /// Constructs an empty atlas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the image for `tile`.
    pub fn insert(&mut self, tile: TileId, texture: T) {
        self.textures.insert(tile, texture);
    }

    /// Returns the background image, if loaded.
    pub fn background(&self) -> Option<&T> {
        self.textures.get(&BLANK)
    }

    /// Returns how to draw `tile`.
    pub fn get(&self, tile: TileId) -> TileVisual<'_, T> {
        match self.textures.get(&tile) {
            Some(texture) => TileVisual::Texture(texture),
            None => TileVisual::Placeholder,
        }
    }

    /// Returns the number of loaded images, including the background.
    pub fn len(&self) -> usize {
        self.textures.len()
    }
    /// Returns whether no images are loaded.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Converts each image, keeping the same identifiers.
    pub fn map<U>(self, mut f: impl FnMut(TileId, T) -> U) -> TileAtlas<U> {
        self.textures
            .into_iter()
            .map(|(tile, texture)| (tile, f(tile, texture)))
            .collect()
    }
}
