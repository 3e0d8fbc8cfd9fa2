use anyhow::Result;
use sintonia_etl::Config;

/// Print the normalized feature profile of a selected song: the data
/// a radar chart would render, plus bpm.
pub fn show_profile(config: &Config, title: &str, artist: &str, json: bool) -> Result<()> {
    let engine = super::build_engine(config)?;

    let profile = match engine.profile(title, artist) {
        Ok(profile) => profile,
        Err(err) if err.is_not_found() => {
            println!("Song not found in the catalog: \"{title}\" by {artist}");
            println!("Run `sintonia songs` to see the selectable songs.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    let features = profile.features;
    println!(
        "\n🎚  \"{}\" by {}\n",
        profile.track_name, profile.artist_name
    );

    let rows = [
        ("danceability", features.danceability),
        ("valence", features.valence),
        ("energy", features.energy),
        ("acousticness", features.acousticness),
        ("instrumentalness", features.instrumentalness),
        ("liveness", features.liveness),
        ("speechiness", features.speechiness),
    ];
    for (name, value) in rows {
        println!("  {:<17} {:>6.2}  {}", name, value, bar(value));
    }
    println!("  {:<17} {:>6.2}  {}", "bpm (scaled)", features.bpm, bar(features.bpm));

    Ok(())
}

fn bar(value: f64) -> String {
    if !value.is_finite() {
        return "(unparsed)".to_string();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = (value.clamp(0.0, 1.0) * 20.0).round() as usize;
    "█".repeat(filled)
}
