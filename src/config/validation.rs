//! Validation logic for configuration.

use crate::error::{Error, Result};
use crate::source::is_http_url;

use super::Config;

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("companies.path", &self.companies.path),
            ("modules.path", &self.modules.path),
            ("template.path", &self.template.path),
            ("output.path", &self.output.path),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{} must not be empty", key)));
            }
        }

        if self.companies.remote && !is_http_url(&self.companies.url) {
            return Err(Error::Config(format!(
                "companies.url must be an http(s) URL when companies.remote is set, got '{}'",
                self.companies.url
            )));
        }

        Ok(())
    }
}
