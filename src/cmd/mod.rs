//! Command module structure for the awesome-readme CLI

use anyhow::Result;
use std::path::Path;

use awesome_readme::config::Config;

pub mod generate;

/// Load the config from `path` when given, otherwise from the working
/// directory (falling back to defaults).
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}
