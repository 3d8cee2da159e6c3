mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub const CLASSIFIER_URL_ENV: &str = "EMOTION_CLASSIFIER_URL";
pub const SERVER_HOST_ENV: &str = "SERVER_HOST";
pub const SERVER_PORT_ENV: &str = "SERVER_PORT";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_from(&config_path).await?;
    apply_overrides(&mut config, |key| env::var(key).ok())?;

    Ok(config)
}

/// Reads a YAML config file, falling back to defaults when it does not exist.
pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    if !tokio::fs::try_exists(path).await? {
        debug!("No configuration file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Applies environment overrides; `lookup` resolves a variable name to its value.
pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(CLASSIFIER_URL_ENV) {
        config.classifier.url = url;
    }

    if let Some(host) = lookup(SERVER_HOST_ENV) {
        config.server.host = host;
    }

    if let Some(port) = lookup(SERVER_PORT_ENV) {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("Invalid {}: '{}'", SERVER_PORT_ENV, port)))?;
    }

    Ok(())
}
