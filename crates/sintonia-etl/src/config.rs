use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for sintonia.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (SINTONIA_* prefix)
/// 3. Config file (~/.config/sintonia/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the candidate-pool catalog CSV.
    ///
    /// Can be set via:
    /// - CLI: --catalog /path/to/largeds_cleaned.csv
    /// - ENV: SINTONIA_CATALOG_PATH
    /// - Config: catalog_path = "/path/to/largeds_cleaned.csv"
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Path to the user-facing frontend catalog CSV.
    ///
    /// Can be set via:
    /// - CLI: --frontend /path/to/frontds_cleaned.csv
    /// - ENV: SINTONIA_FRONTEND_PATH
    /// - Config: frontend_path = "/path/to/frontds_cleaned.csv"
    #[serde(default = "default_frontend_path")]
    pub frontend_path: PathBuf,

    /// Default number of recommendations per query.
    #[serde(default = "default_recommendations")]
    pub recommendations: usize,

    /// Log level filter when RUST_LOG is not set (error, warn, info,
    /// debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            frontend_path: default_frontend_path(),
            recommendations: default_recommendations(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/sintonia/config.toml
    /// Reads environment variables with SINTONIA_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("sintonia");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with CLI path overrides applied on top.
    pub fn load_with_overrides(
        catalog: Option<PathBuf>,
        frontend: Option<PathBuf>,
    ) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(path) = catalog {
            config.catalog_path = path;
        }
        if let Some(path) = frontend {
            config.frontend_path = path;
        }
        Ok(config)
    }
}

fn default_catalog_path() -> PathBuf {
    data_dir().join("largeds_cleaned.csv")
}

fn default_frontend_path() -> PathBuf {
    data_dir().join("frontds_cleaned.csv")
}

fn default_recommendations() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sintonia")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/sintonia/config.toml
/// - macOS: ~/Library/Application Support/sintonia/config.toml
/// - Windows: %APPDATA%\sintonia\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sintonia")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Sintonia Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (SINTONIA_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Path to the candidate-pool catalog (the large cleaned charts export)
#
# Can also be set via:
# - CLI: sintonia --catalog /path/to/largeds_cleaned.csv songs
# - Environment: SINTONIA_CATALOG_PATH=/path/to/largeds_cleaned.csv
#catalog_path = "/path/to/largeds_cleaned.csv"

# Path to the user-facing frontend catalog (the selectable subset)
#
# Can also be set via:
# - CLI: sintonia --frontend /path/to/frontds_cleaned.csv songs
# - Environment: SINTONIA_FRONTEND_PATH=/path/to/frontds_cleaned.csv
#frontend_path = "/path/to/frontds_cleaned.csv"

# Default number of recommendations per query
#recommendations = 10

# Log level when RUST_LOG is not set: error, warn, info, debug, trace
#log_level = "info"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.catalog_path.as_os_str().is_empty());
        assert!(!config.frontend_path.as_os_str().is_empty());
        assert_eq!(config.recommendations, 10);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_with_overrides() {
        let catalog = PathBuf::from("/tmp/pool.csv");
        let frontend = PathBuf::from("/tmp/front.csv");
        let config =
            Config::load_with_overrides(Some(catalog.clone()), Some(frontend.clone())).unwrap();
        assert_eq!(config.catalog_path, catalog);
        assert_eq!(config.frontend_path, frontend);
    }
}
