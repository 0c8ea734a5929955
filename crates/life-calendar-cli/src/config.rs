use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "life-calendar.toml";

/// Top-level life-calendar configuration.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LifeCalendarConfig {
    /// Start date used when no DATE argument is given.
    #[serde(default)]
    pub birth_date: Option<String>,

    /// Reference date used when `--reference` is not given.
    #[serde(default)]
    pub reference_date: Option<String>,
}

/// Load configuration.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG`] is read if
/// present, else the empty configuration is used.
pub fn load(path: Option<&Path>) -> Result<LifeCalendarConfig> {
    match path {
        Some(path) => read(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG);
            if default.exists() {
                read(default)
            } else {
                debug!("no config file, using defaults");
                Ok(LifeCalendarConfig::default())
            }
        }
    }
}

fn read(path: &Path) -> Result<LifeCalendarConfig> {
    debug!(path = %path.display(), "reading config");
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse(&toml_str).with_context(|| format!("failed to parse TOML config {}", path.display()))
}

fn parse(toml_str: &str) -> Result<LifeCalendarConfig> {
    Ok(toml::from_str(toml_str)?)
}
