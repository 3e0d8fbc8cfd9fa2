//! Ordered song collections.

use serde::{Deserialize, Serialize};

use crate::model::{Features, Song};

/// An ordered collection of songs, immutable after load.
///
/// Two catalogs coexist in a running engine: the full candidate pool
/// and the user-facing frontend subset. Row order is load order and is
/// significant: it drives tie-breaking in ranking and first-match
/// resolution of duplicate keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    #[must_use]
    pub fn from_songs(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    #[must_use]
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    /// (track_name, artist_name) pairs in load order, for selection UIs.
    pub fn keys(&self) -> impl Iterator<Item = (&str, &str)> {
        self.songs
            .iter()
            .map(|song| (song.track_name.as_str(), song.artist_name.as_str()))
    }

    /// Resolve a selection to its row, case-insensitively.
    ///
    /// Duplicate (title, artist) keys are a known reality in cleaned
    /// charts data; resolution deterministically picks the first row in
    /// load order.
    #[must_use]
    pub fn find(&self, title: &str, artist: &str) -> Option<(usize, &Song)> {
        let hit = self
            .songs
            .iter()
            .enumerate()
            .find(|(_, song)| song.matches_key(title, artist));

        if let Some((index, song)) = hit {
            log::debug!(
                "resolved \"{}\" by {} to row {}",
                song.track_name,
                song.artist_name,
                index
            );
        }
        hit
    }

    /// Rebuild the catalog with every row's features mapped through `f`,
    /// preserving order and identity fields. This is the seam the
    /// scaler transforms through.
    #[must_use]
    pub fn map_features(self, mut f: impl FnMut(Features) -> Features) -> Self {
        let songs = self
            .songs
            .into_iter()
            .map(|mut song| {
                song.features = f(song.features);
                song
            })
            .collect();
        Self { songs }
    }
}

impl FromIterator<Song> for Catalog {
    fn from_iter<I: IntoIterator<Item = Song>>(iter: I) -> Self {
        Self {
            songs: iter.into_iter().collect(),
        }
    }
}
