use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use sintonia_etl::Config;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "sintonia", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the candidate-pool catalog CSV (default from config)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Path to the frontend catalog CSV (default from config)
    #[arg(long, global = true)]
    frontend: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List the selectable songs in catalog order
    Songs {
        /// Show at most this many songs
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Recommend songs similar to a selection
    ///
    /// Resolves the (title, artist) pair case-insensitively against the
    /// frontend catalog, then ranks every song in the candidate pool by
    /// cosine similarity over eight normalized audio features (bpm,
    /// danceability, valence, energy, acousticness, instrumentalness,
    /// liveness, speechiness). Stream counts never influence ranking.
    ///
    /// Rows sharing the selection's (title, artist) key are excluded,
    /// so a song never recommends itself, even with duplicate catalog
    /// entries.
    ///
    /// A selection missing from the catalog prints a hint and exits
    /// cleanly; it is an expected user scenario, not a failure.
    Recommend {
        /// Song title
        title: String,
        /// Artist name(s), exactly as listed by `sintonia songs`
        artist: String,
        /// Number of recommendations (default from config, normally 10)
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the normalized feature profile of a selection
    Profile {
        /// Song title
        title: String,
        /// Artist name(s)
        artist: String,
        /// Emit the profile as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect a catalog file: columns and numeric parse quality
    Inspect {
        /// Path to a catalog CSV
        path: PathBuf,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print a config value (or the whole file)
    Get {
        /// One of: catalog_path, frontend_path, recommendations, log_level
        key: Option<String>,
    },
    /// Create the default config file
    Init,
    /// Print the config file location
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_with_overrides(cli.catalog, cli.frontend)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    match cli.command {
        Commands::Songs { limit } => {
            commands::list_songs(&config, limit)?;
        }
        Commands::Recommend {
            title,
            artist,
            count,
            json,
        } => {
            commands::run_recommend(&config, &title, &artist, count, json)?;
        }
        Commands::Profile {
            title,
            artist,
            json,
        } => {
            commands::show_profile(&config, &title, &artist, json)?;
        }
        Commands::Inspect { path } => {
            commands::run_inspect(&path)?;
        }
        Commands::Config { action } => match action {
            Some(ConfigAction::Get { key }) => commands::config::get_config(key)?,
            Some(ConfigAction::Init) => commands::config::init_config()?,
            Some(ConfigAction::Path) => commands::config::show_config_path()?,
            Some(ConfigAction::Show) | None => commands::config::show_config()?,
        },
    }

    Ok(())
}
