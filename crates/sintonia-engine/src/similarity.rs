//! Cosine similarity and candidate ranking.

use std::cmp::Ordering;

use sintonia_core::model::SIMILARITY_DIM;
use sintonia_core::Catalog;

/// A candidate's catalog position and its similarity score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub index: usize,
    pub score: f64,
}

/// Cosine similarity between two feature vectors.
///
/// Returns NaN when either vector has zero magnitude or a non-finite
/// component; the ranking layer treats that as the lowest possible
/// score rather than letting it leak into the ordering.
#[must_use]
pub fn cosine_similarity(a: &[f64; SIMILARITY_DIM], b: &[f64; SIMILARITY_DIM]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return f64::NAN;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Score every row of `candidates` against `query` and sort descending.
///
/// Undefined scores (NaN vectors, zero magnitude) are pinned to
/// negative infinity so they always rank last. The sort is stable, so
/// equal scores keep their original catalog order and the ranking is
/// deterministic across runs.
#[must_use]
pub fn rank_candidates(query: &[f64; SIMILARITY_DIM], candidates: &Catalog) -> Vec<Scored> {
    let mut scored: Vec<Scored> = candidates
        .songs()
        .iter()
        .enumerate()
        .map(|(index, song)| {
            let score = cosine_similarity(query, &song.features.similarity_vector());
            Scored {
                index,
                score: if score.is_finite() {
                    score
                } else {
                    f64::NEG_INFINITY
                },
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}
