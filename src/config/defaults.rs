//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

/// Published list of companies on the Moleculer site
pub const COMPANIES_URL: &str =
    "https://raw.githubusercontent.com/moleculerjs/site/master/source/_data/companies.yml";

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(default_companies_path, String, "companies.yml".to_string());
default_fn!(default_companies_url, String, COMPANIES_URL.to_string());
default_fn!(default_modules_path, String, "modules.yml".to_string());
default_fn!(
    default_template_path,
    String,
    "templates/readme-template.md".to_string()
);
default_fn!(default_output_path, String, "README.md".to_string());
default_fn!(default_true, bool, true);

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// Where the companies list comes from
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompaniesConfig {
    /// Local file (default: companies.yml)
    #[serde(default = "default_companies_path")]
    pub path: String,
    /// Remote document, used only when `remote` is set
    #[serde(default = "default_companies_url")]
    pub url: String,
    /// Fetch `url` instead of reading `path` (default: false)
    #[serde(default)]
    pub remote: bool,
}

impl Default for CompaniesConfig {
    fn default() -> Self {
        Self {
            path: default_companies_path(),
            url: default_companies_url(),
            remote: false,
        }
    }
}

/// Module catalog location
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModulesConfig {
    /// Local file (default: modules.yml)
    #[serde(default = "default_modules_path")]
    pub path: String,
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            path: default_modules_path(),
        }
    }
}

/// README template settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplateConfig {
    /// Template file (default: templates/readme-template.md)
    #[serde(default = "default_template_path")]
    pub path: String,
    /// HTML-escape plain substitutions (default: true)
    #[serde(default = "default_true")]
    pub autoescape: bool,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            path: default_template_path(),
            autoescape: true,
        }
    }
}

/// Generated file location
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Output file, overwritten on every run (default: README.md)
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}
