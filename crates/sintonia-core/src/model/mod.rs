//! Domain model: songs and their audio features.

pub mod features;
pub mod song;

pub use features::{Features, NUMERIC_FIELD_NAMES, NUMERIC_FIELD_COUNT, SIMILARITY_DIM};
pub use song::Song;
