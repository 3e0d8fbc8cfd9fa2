//! Integration tests for the full load → normalize → recommend flow.
//!
//! These tests write small CSV fixtures shaped like the cleaned charts
//! exports, load them through the ETL layer, and exercise the engine
//! end to end.

use std::io::Write;

use tempfile::NamedTempFile;

use sintonia_engine::Recommender;
use sintonia_etl::load_catalog;

const HEADER: &str = "track_name,artist(s)_name,streams,bpm,danceability_%,valence_%,energy_%,acousticness_%,instrumentalness_%,liveness_%,speechiness_%";

const POOL_ROWS: &[&str] = &[
    "Flowers,Miley Cyrus,1316855716,118,71,65,68,6,0,3,7",
    "Cruel Summer,Taylor Swift,800840817,170,55,56,70,12,0,11,16",
    "Kill Bill,SZA,1163093654,89,64,43,73,5,17,16,4",
    "Take Five,Dave Brubeck,220000000,174,44,56,26,79,83,9,4",
    "Daylight,David Kushner,387570742,130,51,32,43,83,0,9,3",
    "Sprinter,\"Dave, Central Cee\",183706234,141,92,66,58,19,0,8,25",
];

const FRONTEND_ROWS: &[&str] = &[
    "Flowers,Miley Cyrus,1316855716,118,71,65,68,6,0,3,7",
    "Kill Bill,SZA,1163093654,89,64,43,73,5,17,16,4",
    "Sprinter,\"Dave, Central Cee\",183706234,141,92,66,58,19,0,8,25",
];

fn write_fixture(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create fixture");
    writeln!(file, "{HEADER}").expect("write header");
    for row in rows {
        writeln!(file, "{row}").expect("write row");
    }
    file
}

fn build_engine() -> Recommender {
    let pool_file = write_fixture(POOL_ROWS);
    let frontend_file = write_fixture(FRONTEND_ROWS);

    let pool = load_catalog(pool_file.path()).expect("load pool");
    let frontend = load_catalog(frontend_file.path()).expect("load frontend");
    Recommender::new(pool, frontend).expect("build engine")
}

#[test]
fn test_load_preserves_row_order_and_quoting() {
    let file = write_fixture(POOL_ROWS);
    let catalog = load_catalog(file.path()).expect("load pool");

    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.songs()[0].track_name, "Flowers");
    // Quoted artist field with an embedded comma survives intact.
    assert_eq!(catalog.songs()[5].artist_name, "Dave, Central Cee");
}

#[test]
fn test_fitted_pool_features_are_normalized() {
    let pool_file = write_fixture(POOL_ROWS);
    let pool = load_catalog(pool_file.path()).expect("load pool");
    let frontend = pool.clone();
    let engine = Recommender::new(pool, frontend).expect("build engine");

    for song in engine.songs() {
        for value in song.features.to_array() {
            assert!(
                (0.0..=1.0).contains(&value),
                "{}: value {value} outside [0, 1]",
                song.track_name
            );
        }
    }
}

#[test]
fn test_recommend_full_flow() {
    let engine = build_engine();
    let results = engine.recommend("Kill Bill", "SZA", 3).expect("recommend");

    assert_eq!(results.len(), 3);
    assert!(results
        .iter()
        .all(|r| !(r.track_name == "Kill Bill" && r.artist_name == "SZA")));
    // Scores are sorted descending.
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_recommend_is_case_insensitive_end_to_end() {
    let engine = build_engine();
    let exact = engine.recommend("Sprinter", "Dave, Central Cee", 2).expect("recommend");
    let cased = engine.recommend("sprinter", "DAVE, CENTRAL CEE", 2).expect("recommend");
    assert_eq!(exact, cased);
}

#[test]
fn test_recommend_missing_song_signals_not_found() {
    let engine = build_engine();
    let err = engine
        .recommend("Bohemian Rhapsody", "Queen", 5)
        .expect_err("song is absent from the frontend catalog");
    assert!(err.is_not_found());
}

#[test]
fn test_profile_full_flow() {
    let engine = build_engine();
    let profile = engine.profile("Flowers", "Miley Cyrus").expect("profile");

    assert_eq!(profile.artist_name, "Miley Cyrus");
    // Flowers has the pool-wide minimum liveness (3), so it scales to 0.
    assert_eq!(profile.features.liveness, 0.0);
}

#[test]
fn test_pool_with_unparsable_rows_still_ranks() {
    let mut rows = POOL_ROWS.to_vec();
    rows.push("Corrupted,Unknown,n/a,n/a,n/a,n/a,n/a,n/a,n/a,n/a,n/a");
    let pool_file = write_fixture(&rows);
    let frontend_file = write_fixture(FRONTEND_ROWS);

    let pool = load_catalog(pool_file.path()).expect("load pool");
    let frontend = load_catalog(frontend_file.path()).expect("load frontend");
    let engine = Recommender::new(pool, frontend).expect("build engine");

    let results = engine.recommend("Flowers", "Miley Cyrus", 10).expect("recommend");
    // The NaN row ranks last, after every comparable candidate.
    assert_eq!(results.last().map(|r| r.track_name.as_str()), Some("Corrupted"));
}
