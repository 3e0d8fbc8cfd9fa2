use anyhow::Result;
use sintonia_etl::Config;

/// List the selectable songs in frontend catalog order.
pub fn list_songs(config: &Config, limit: Option<usize>) -> Result<()> {
    let engine = super::build_engine(config)?;
    let songs = engine.songs();

    let shown = limit.unwrap_or(songs.len()).min(songs.len());
    println!("\n🎵 Selectable songs ({} of {})\n", shown, songs.len());

    for song in &songs[..shown] {
        println!("  {} — {}", song.track_name, song.artist_name);
    }

    if shown < songs.len() {
        println!("\n  … and {} more (raise --limit to see them)", songs.len() - shown);
    }

    Ok(())
}
