use anyhow::Result;
use sintonia_etl::Config;

/// Rank the candidate pool against a selected song and print the top
/// matches.
pub fn run_recommend(
    config: &Config,
    title: &str,
    artist: &str,
    count: Option<usize>,
    json: bool,
) -> Result<()> {
    let engine = super::build_engine(config)?;
    let n = count.unwrap_or(config.recommendations);

    let results = match engine.recommend(title, artist, n) {
        Ok(results) => results,
        Err(err) if err.is_not_found() => {
            println!("Song not found in the catalog: \"{title}\" by {artist}");
            println!("Run `sintonia songs` to see the selectable songs.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("\n🎧 Because you listened to \"{title}\" by {artist}\n");

    if results.is_empty() {
        println!("  No other candidates to recommend.");
        return Ok(());
    }

    for (rank, rec) in results.iter().enumerate() {
        println!(
            "  {:>2}. {} — {}  (similarity {:.4})",
            rank + 1,
            rec.track_name,
            rec.artist_name,
            rec.score
        );
    }

    Ok(())
}
