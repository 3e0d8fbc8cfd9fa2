pub mod config;
pub mod inspect;
pub mod profile;
pub mod recommend;
pub mod songs;

pub use inspect::run_inspect;
pub use profile::show_profile;
pub use recommend::run_recommend;
pub use songs::list_songs;

use anyhow::{Context, Result};
use sintonia_engine::Recommender;
use sintonia_etl::{load_catalog, Config};

/// Load both catalogs and construct the engine.
pub fn build_engine(config: &Config) -> Result<Recommender> {
    let pool = load_catalog(&config.catalog_path).with_context(|| {
        format!(
            "loading candidate catalog from {}",
            config.catalog_path.display()
        )
    })?;
    let frontend = load_catalog(&config.frontend_path).with_context(|| {
        format!(
            "loading frontend catalog from {}",
            config.frontend_path.display()
        )
    })?;

    log::debug!(
        "building engine from {} candidates and {} frontend songs",
        pool.len(),
        frontend.len()
    );
    let engine = Recommender::new(pool, frontend)?;
    Ok(engine)
}
