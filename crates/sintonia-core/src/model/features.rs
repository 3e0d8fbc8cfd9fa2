use serde::{Deserialize, Serialize};

/// Number of numeric columns carried per song: streams, bpm, and the
/// seven perceptual features. All nine are scaled by one fitted scaler.
pub const NUMERIC_FIELD_COUNT: usize = 9;

/// Dimension of the similarity vector: bpm plus the seven perceptual
/// features. Streams is display-only and never enters similarity.
pub const SIMILARITY_DIM: usize = 8;

/// Source column labels, aligned with [`Features::to_array`].
pub const NUMERIC_FIELD_NAMES: [&str; NUMERIC_FIELD_COUNT] = [
    "streams",
    "bpm",
    "danceability_%",
    "valence_%",
    "energy_%",
    "acousticness_%",
    "instrumentalness_%",
    "liveness_%",
    "speechiness_%",
];

/// Numeric audio features of one song.
///
/// Values come straight from the catalog file: bpm in beats per minute,
/// the perceptual features as 0-100 percentages, streams as a play
/// count. A field that failed numeric parsing is `f64::NAN`; NaN rows
/// survive loading and are handled explicitly at ranking time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub streams: f64,
    pub bpm: f64,
    pub danceability: f64,
    pub valence: f64,
    pub energy: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub speechiness: f64,
}

impl Features {
    /// All nine numeric fields in [`NUMERIC_FIELD_NAMES`] order.
    #[must_use]
    pub fn to_array(self) -> [f64; NUMERIC_FIELD_COUNT] {
        [
            self.streams,
            self.bpm,
            self.danceability,
            self.valence,
            self.energy,
            self.acousticness,
            self.instrumentalness,
            self.liveness,
            self.speechiness,
        ]
    }

    /// Rebuild from an array in [`NUMERIC_FIELD_NAMES`] order.
    #[must_use]
    pub fn from_array(values: [f64; NUMERIC_FIELD_COUNT]) -> Self {
        Self {
            streams: values[0],
            bpm: values[1],
            danceability: values[2],
            valence: values[3],
            energy: values[4],
            acousticness: values[5],
            instrumentalness: values[6],
            liveness: values[7],
            speechiness: values[8],
        }
    }

    /// The 8-dimensional vector compared by the similarity engine.
    #[must_use]
    pub fn similarity_vector(self) -> [f64; SIMILARITY_DIM] {
        [
            self.bpm,
            self.danceability,
            self.valence,
            self.energy,
            self.acousticness,
            self.instrumentalness,
            self.liveness,
            self.speechiness,
        ]
    }

    /// Returns `true` when every field entering similarity is finite.
    #[must_use]
    pub fn is_comparable(self) -> bool {
        self.similarity_vector().iter().all(|v| v.is_finite())
    }
}
