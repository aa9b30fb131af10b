//! # awesome-readme - Awesome Moleculer README generator
//!
//! Builds the project README from two YAML data files: the curated module
//! catalog and the list of companies using Moleculer.
//!
//! ## Overview
//!
//! The pipeline is linear: load YAML, reshape it into the view the template
//! expects, render the template with Tera and write the output file. Every
//! step returns a [`error::Result`] and the first failure stops the run.
//!
//! ## Modules
//!
//! - [`source`] - YAML loading from local files or remote URLs
//! - [`companies`] - Companies list flattening
//! - [`catalog`] - Module catalog parsing into flat or nested topics
//! - [`readme`] - View building, rendering and output
//! - [`config`] - Configuration with per-field defaults
//! - [`error`] - Error taxonomy shared by every stage
//!
//! ## Example
//!
//! ```no_run
//! use awesome_readme::config::Config;
//! use awesome_readme::readme::ReadmeGenerator;
//!
//! let config = Config::load().expect("Failed to load config");
//! let result = ReadmeGenerator::new(config)
//!     .build()
//!     .expect("Failed to generate README");
//! println!("{} modules written", result.stats.modules);
//! ```

pub mod catalog;
pub mod companies;
pub mod config;
pub mod error;
pub mod readme;
pub mod source;
