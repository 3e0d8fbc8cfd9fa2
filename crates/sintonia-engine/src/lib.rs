//! Recommendation engine for sintonia.
//!
//! Fits a min-max scaler on the candidate catalog, applies the same
//! transform to the frontend catalog, and ranks candidates by cosine
//! similarity over the 8-dimensional audio-feature vector.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod recommend;
pub mod scale;
pub mod similarity;

pub use recommend::{Recommendation, Recommender, SongProfile};
pub use scale::MinMaxScaler;
pub use similarity::{cosine_similarity, rank_candidates, Scored};
