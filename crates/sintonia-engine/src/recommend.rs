//! The recommendation engine facade.

use serde::Serialize;

use sintonia_core::model::Features;
use sintonia_core::{Catalog, Error, Result, Song};

use crate::scale::MinMaxScaler;
use crate::similarity::rank_candidates;

/// One ranked recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub track_name: String,
    pub artist_name: String,
    pub score: f64,
}

/// The normalized feature profile of a selected song, for display
/// (radar charts and the like).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongProfile {
    pub track_name: String,
    pub artist_name: String,
    /// Min-max scaled features; perceptual values from the fitted pool
    /// lie in [0, 1].
    pub features: Features,
}

/// Song recommender over two catalogs.
///
/// Construction loads everything the engine will ever need: the scaler
/// is fit exactly once on the candidate pool and both catalogs are
/// transformed up front. Every later call is a read-only lookup over
/// immutable data, so one instance can be shared freely.
#[derive(Debug, Clone)]
pub struct Recommender {
    scaler: MinMaxScaler,
    candidates: Catalog,
    frontend: Catalog,
}

impl Recommender {
    /// Build an engine from the candidate pool and the user-facing
    /// frontend catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Normalization`] when the pool is empty or has a
    /// column with no parseable values.
    pub fn new(candidates: Catalog, frontend: Catalog) -> Result<Self> {
        let scaler = MinMaxScaler::fit(&candidates)?;
        let candidates = scaler.transform_catalog(candidates);
        let frontend = scaler.transform_catalog(frontend);

        log::info!(
            "engine ready: {} candidates, {} selectable songs",
            candidates.len(),
            frontend.len()
        );
        Ok(Self {
            scaler,
            candidates,
            frontend,
        })
    }

    /// The selectable songs, in frontend load order.
    #[must_use]
    pub fn songs(&self) -> &[Song] {
        self.frontend.songs()
    }

    /// The fitted scale parameters.
    #[must_use]
    pub fn scaler(&self) -> &MinMaxScaler {
        &self.scaler
    }

    /// Recommend up to `n` songs similar to the selection.
    ///
    /// The selection is resolved case-insensitively against the
    /// frontend catalog. Candidates sharing the selection's
    /// (title, artist) key are excluded by identity, so the query never
    /// recommends itself even when the catalogs hold duplicate rows.
    ///
    /// # Errors
    ///
    /// [`Error::SongNotFound`] when the selection does not resolve;
    /// [`Error::EmptyCatalog`] when there is no candidate pool to rank.
    pub fn recommend(&self, title: &str, artist: &str, n: usize) -> Result<Vec<Recommendation>> {
        if self.candidates.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let (_, query) = self
            .frontend
            .find(title, artist)
            .ok_or_else(|| Error::SongNotFound {
                title: title.to_string(),
                artist: artist.to_string(),
            })?;
        let query_vector = query.features.similarity_vector();

        let ranked = rank_candidates(&query_vector, &self.candidates);
        log::debug!(
            "ranked {} candidates for \"{}\" by {}",
            ranked.len(),
            query.track_name,
            query.artist_name
        );

        let results = ranked
            .into_iter()
            .filter(|scored| {
                let candidate = &self.candidates.songs()[scored.index];
                !candidate.matches_key(title, artist)
            })
            .take(n)
            .map(|scored| {
                let candidate = &self.candidates.songs()[scored.index];
                Recommendation {
                    track_name: candidate.track_name.clone(),
                    artist_name: candidate.artist_name.clone(),
                    score: scored.score,
                }
            })
            .collect();
        Ok(results)
    }

    /// The normalized feature profile of a selected song.
    ///
    /// # Errors
    ///
    /// [`Error::SongNotFound`] when the selection does not resolve.
    pub fn profile(&self, title: &str, artist: &str) -> Result<SongProfile> {
        let (_, song) = self
            .frontend
            .find(title, artist)
            .ok_or_else(|| Error::SongNotFound {
                title: title.to_string(),
                artist: artist.to_string(),
            })?;

        Ok(SongProfile {
            track_name: song.track_name.clone(),
            artist_name: song.artist_name.clone(),
            features: song.features,
        })
    }
}
