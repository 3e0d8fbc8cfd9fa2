use serde::{Deserialize, Serialize};

use crate::model::Features;

/// One catalog row.
///
/// Songs are identified by the (track_name, artist_name) pair. The pair
/// is a natural key: lookup is case-insensitive and duplicates are
/// possible in real-world catalogs, so resolution always picks the
/// first row in load order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub track_name: String,
    pub artist_name: String,
    pub features: Features,
}

impl Song {
    #[must_use]
    pub fn new(
        track_name: impl Into<String>,
        artist_name: impl Into<String>,
        features: Features,
    ) -> Self {
        Self {
            track_name: track_name.into(),
            artist_name: artist_name.into(),
            features,
        }
    }

    /// Case-insensitive natural-key comparison against a selection.
    #[must_use]
    pub fn matches_key(&self, title: &str, artist: &str) -> bool {
        self.track_name.to_lowercase() == title.to_lowercase()
            && self.artist_name.to_lowercase() == artist.to_lowercase()
    }

    /// Case-insensitive identity comparison against another song.
    #[must_use]
    pub fn same_key(&self, other: &Song) -> bool {
        self.matches_key(&other.track_name, &other.artist_name)
    }
}
