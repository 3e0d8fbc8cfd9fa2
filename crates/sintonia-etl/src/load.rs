//! CSV catalog loading.

use std::path::Path;

use csv::StringRecord;

use sintonia_core::model::{Features, NUMERIC_FIELD_NAMES, NUMERIC_FIELD_COUNT};
use sintonia_core::{Catalog, Error, Result, Song};

/// Identity column: song title.
pub const TRACK_COLUMN: &str = "track_name";

/// Identity column: artist name(s), as exported by the charts source.
pub const ARTIST_COLUMN: &str = "artist(s)_name";

/// Every header column a catalog file must carry.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    TRACK_COLUMN,
    ARTIST_COLUMN,
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

/// Load a catalog from a cleaned CSV export.
///
/// Every field is read as text. The nine numeric columns are parsed to
/// `f64`; fields that do not parse become NaN and stay in the catalog,
/// to be handled at fit/ranking time.
///
/// # Errors
///
/// Returns [`Error::DataLoad`] when the file cannot be opened, a
/// required column is missing, or a row is structurally malformed.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| data_load(path, format!("cannot open file: {e}")))?;

    let headers = reader
        .headers()
        .map_err(|e| data_load(path, format!("cannot read header row: {e}")))?
        .clone();
    let columns = ColumnIndices::resolve(path, &headers)?;

    let mut songs = Vec::new();
    for (row, record) in reader.records().enumerate() {
        // Header is line 1, first record line 2.
        let record = record.map_err(|e| data_load(path, format!("line {}: {e}", row + 2)))?;
        songs.push(columns.song_from_record(&record));
    }

    log::info!("loaded {} songs from {}", songs.len(), path.display());
    Ok(Catalog::from_songs(songs))
}

/// Parse counts for one numeric column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnReport {
    pub name: String,
    /// Rows whose field parsed as a number.
    pub parsed: usize,
    /// Rows coerced to NaN.
    pub coerced: usize,
}

/// Summary of a catalog file's columns and numeric parse quality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectReport {
    pub rows: usize,
    pub headers: Vec<String>,
    pub columns: Vec<ColumnReport>,
}

/// Inspect a catalog file without building a catalog: header columns
/// plus, per numeric column, how many rows parse cleanly vs. coerce to
/// NaN.
///
/// # Errors
///
/// Returns [`Error::DataLoad`] on unreadable files or malformed rows;
/// missing numeric columns are reported, not fatal.
pub fn inspect_catalog(path: &Path) -> Result<InspectReport> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| data_load(path, format!("cannot open file: {e}")))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| data_load(path, format!("cannot read header row: {e}")))?
        .iter()
        .map(str::to_string)
        .collect();

    let numeric: Vec<(String, Option<usize>)> = NUMERIC_FIELD_NAMES
        .iter()
        .map(|name| {
            let index = headers.iter().position(|h| h == name);
            ((*name).to_string(), index)
        })
        .collect();

    let mut rows = 0;
    let mut parsed = vec![0usize; numeric.len()];
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| data_load(path, format!("line {}: {e}", row + 2)))?;
        rows += 1;
        for (slot, (_, index)) in numeric.iter().enumerate() {
            let value = index.and_then(|i| record.get(i)).map(parse_numeric);
            if value.is_some_and(f64::is_finite) {
                parsed[slot] += 1;
            }
        }
    }

    let columns = numeric
        .into_iter()
        .zip(parsed)
        .map(|((name, _), parsed)| ColumnReport {
            name,
            parsed,
            coerced: rows - parsed,
        })
        .collect();

    Ok(InspectReport {
        rows,
        headers,
        columns,
    })
}

fn data_load(path: &Path, message: String) -> Error {
    Error::DataLoad {
        path: path.to_path_buf(),
        message,
    }
}

/// Text-to-number coercion: trims whitespace, NaN on failure.
fn parse_numeric(field: &str) -> f64 {
    field.trim().parse().unwrap_or(f64::NAN)
}

/// Resolved positions of the required columns in one file's header.
#[derive(Debug)]
struct ColumnIndices {
    track: usize,
    artist: usize,
    numeric: [usize; NUMERIC_FIELD_COUNT],
}

impl ColumnIndices {
    fn resolve(path: &Path, headers: &StringRecord) -> Result<Self> {
        let position = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| data_load(path, format!("missing required column \"{name}\"")))
        };

        let mut numeric = [0usize; NUMERIC_FIELD_COUNT];
        for (slot, name) in NUMERIC_FIELD_NAMES.iter().enumerate() {
            numeric[slot] = position(name)?;
        }
        Ok(Self {
            track: position(TRACK_COLUMN)?,
            artist: position(ARTIST_COLUMN)?,
            numeric,
        })
    }

    fn song_from_record(&self, record: &StringRecord) -> Song {
        let field = |index: usize| record.get(index).unwrap_or_default();

        let mut values = [f64::NAN; NUMERIC_FIELD_COUNT];
        for (slot, &index) in self.numeric.iter().enumerate() {
            values[slot] = parse_numeric(field(index));
        }

        Song::new(
            field(self.track),
            field(self.artist),
            Features::from_array(values),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "track_name,artist(s)_name,streams,bpm,danceability_%,valence_%,energy_%,acousticness_%,instrumentalness_%,liveness_%,speechiness_%";

    fn write_csv(rows: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file
    }

    #[test]
    fn test_load_parses_rows_in_order() {
        let file = write_csv(&[
            "Flowers,Miley Cyrus,1316855716,118,71,65,68,6,0,3,7",
            "Cruel Summer,Taylor Swift,800840817,170,55,56,70,12,0,11,16",
        ]);

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let first = &catalog.songs()[0];
        assert_eq!(first.track_name, "Flowers");
        assert_eq!(first.artist_name, "Miley Cyrus");
        assert_eq!(first.features.bpm, 118.0);
        assert_eq!(first.features.speechiness, 7.0);
        assert_eq!(catalog.songs()[1].track_name, "Cruel Summer");
    }

    #[test]
    fn test_load_coerces_unparsable_to_nan() {
        let file = write_csv(&["Bad Row,Artist,BPM100F,not-a-number,71,65,68,6,0,3,7"]);

        let catalog = load_catalog(file.path()).unwrap();
        let features = catalog.songs()[0].features;
        assert!(features.streams.is_nan());
        assert!(features.bpm.is_nan());
        assert_eq!(features.danceability, 71.0);
    }

    #[test]
    fn test_load_missing_column_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "track_name,artist(s)_name,streams").unwrap();
        writeln!(file, "Song,Artist,123").unwrap();

        let err = load_catalog(file.path()).unwrap_err();
        match err {
            Error::DataLoad { message, .. } => assert!(message.contains("bpm")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = load_catalog(Path::new("/nonexistent/catalog.csv")).unwrap_err();
        assert!(matches!(err, Error::DataLoad { .. }));
    }

    #[test]
    fn test_inspect_counts_coercions() {
        let file = write_csv(&[
            "Flowers,Miley Cyrus,1316855716,118,71,65,68,6,0,3,7",
            "Bad Row,Artist,oops,119,70,64,67,5,0,2,6",
        ]);

        let report = inspect_catalog(file.path()).unwrap();
        assert_eq!(report.rows, 2);
        assert_eq!(report.headers.len(), 11);

        let streams = report
            .columns
            .iter()
            .find(|c| c.name == "streams")
            .unwrap();
        assert_eq!(streams.parsed, 1);
        assert_eq!(streams.coerced, 1);

        let bpm = report.columns.iter().find(|c| c.name == "bpm").unwrap();
        assert_eq!(bpm.parsed, 2);
        assert_eq!(bpm.coerced, 0);
    }
}
