use anyhow::{Context, Result};
use sintonia_etl::{config, Config};

/// Show the current effective configuration.
pub fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  catalog_path: {}", config.catalog_path.display());
    println!("  frontend_path: {}", config.frontend_path.display());
    println!("  recommendations: {}", config.recommendations);
    println!("  log_level: {}", config.log_level);

    println!("\nPriority: CLI args > ENV vars (SINTONIA_*) > Config file > Defaults");

    Ok(())
}

/// Get a specific config value.
pub fn get_config(key: Option<String>) -> Result<()> {
    if let Some(key) = key {
        let config = Config::load()?;

        match key.as_str() {
            "catalog_path" => println!("{}", config.catalog_path.display()),
            "frontend_path" => println!("{}", config.frontend_path.display()),
            "recommendations" => println!("{}", config.recommendations),
            "log_level" => println!("{}", config.log_level),
            _ => {
                anyhow::bail!(
                    "Unknown config key: {}\n\nValid keys: catalog_path, frontend_path, recommendations, log_level",
                    key
                );
            }
        }
    } else {
        // No key provided, show entire config file contents
        let config_path = config::config_file_path();

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;
            print!("{}", contents);
        } else {
            println!("Config file does not exist: {}", config_path.display());
            println!("\nRun 'sintonia config init' to create it.");
        }
    }

    Ok(())
}

/// Create the default config file if it does not exist yet.
pub fn init_config() -> Result<()> {
    let config_path = config::config_file_path();

    if config::ensure_config_file()? {
        println!("Created {}", config_path.display());
        println!("Edit it to point at your cleaned catalog exports.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}

/// Print the config file location.
pub fn show_config_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}
