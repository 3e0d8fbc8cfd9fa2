use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A catalog file was missing, unreadable, or structurally malformed.
    #[error("failed to load catalog from {path}: {message}")]
    DataLoad { path: PathBuf, message: String },

    /// The selected (title, artist) pair resolves to no catalog row.
    ///
    /// A missing song is an expected user scenario, not a system fault;
    /// callers should surface it as a message rather than abort.
    #[error("song not found: \"{title}\" by {artist}")]
    SongNotFound { title: String, artist: String },

    /// The candidate pool has no rows to rank.
    #[error("candidate catalog is empty")]
    EmptyCatalog,

    /// Scaler fit attempted on empty or all-undefined data.
    #[error("normalization failed: {0}")]
    Normalization(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` when the error indicates the selection did not
    /// resolve to any catalog row.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SongNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_helper() {
        let err = Error::SongNotFound {
            title: "Cruel Summer".to_string(),
            artist: "Taylor Swift".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!Error::EmptyCatalog.is_not_found());
    }

    #[test]
    fn test_display_includes_key() {
        let err = Error::SongNotFound {
            title: "Flowers".to_string(),
            artist: "Miley Cyrus".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("Flowers"));
        assert!(message.contains("Miley Cyrus"));
    }
}
