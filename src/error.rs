//! Error types for the README generation pipeline.
//!
//! Each pipeline stage returns [`Result`] so its failure modes show up in its
//! signature. The binary is the only place errors are reported.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A local file could not be read or written.
    #[error("Failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A remote document could not be fetched.
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The document is not valid YAML.
    #[error("Failed to parse YAML from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The YAML is valid but not shaped the way the view builders expect.
    #[error("Unexpected structure in {origin}: {message}")]
    Shape { origin: String, message: String },

    /// The template could not be compiled or rendered against the view.
    #[error("Failed to render template")]
    Render(#[from] tera::Error),

    /// The configuration file is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn shape(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Shape {
            origin: origin.into(),
            message: message.into(),
        }
    }
}
