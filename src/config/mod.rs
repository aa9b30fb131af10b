//! Configuration for README generation.
//!
//! Every setting has a default, so the config file is optional. When present,
//! `.awesome-readme.yml` in the working directory overrides the defaults.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::source::{self, YamlSource};

pub mod defaults;
pub mod validation;

pub use defaults::*;

/// Config file picked up from the working directory
pub const CONFIG_FILE: &str = ".awesome-readme.yml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub companies: CompaniesConfig,
    #[serde(default)]
    pub modules: ModulesConfig,
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load `.awesome-readme.yml` if it exists, otherwise the defaults.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        Self::parse(&content, &path.display().to_string())
    }

    /// Parse config YAML. `origin` only labels errors.
    pub fn parse(content: &str, origin: &str) -> Result<Self> {
        let value = source::parse(content, origin)?;

        // An empty file is a valid, all-defaults config
        let config: Config = if value.is_null() {
            Config::default()
        } else {
            serde_yaml::from_value(value).map_err(|e| Error::Parse {
                origin: origin.to_string(),
                source: e,
            })?
        };

        config.validate()?;

        Ok(config)
    }

    /// Source of the companies list, honoring the `remote` switch.
    pub fn companies_source(&self) -> YamlSource {
        if self.companies.remote {
            YamlSource::remote(&self.companies.url)
        } else {
            YamlSource::local(&self.companies.path)
        }
    }

    pub fn modules_source(&self) -> YamlSource {
        YamlSource::local(&self.modules.path)
    }
}
