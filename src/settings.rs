use anyhow::Context;
use atlas_grid::GridConfig;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::{error, info};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Top-level settings file layout.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
}

/// Loads settings from `path`, overlaid with `ATLAS_`-prefixed environment
/// variables (`ATLAS_GRID__SERVERS_X=7`).
///
/// Keys are read lowercased, so the file must use snake_case names.
pub fn load_settings(path: &str) -> anyhow::Result<Settings> {
    info!("Attempting to load configuration from {}", path);

    let built = Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(true))
        .add_source(
            Environment::with_prefix("ATLAS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build();

    let config = match built {
        Ok(config) => {
            info!("Successfully loaded configuration: {:?}", config);
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e).with_context(|| format!("reading configuration from {path}"));
        }
    };

    let settings: Settings = config
        .try_deserialize()
        .context("configuration does not describe a grid")?;
    settings
        .grid
        .validate()
        .context("invalid grid configuration")?;

    Ok(settings)
}
