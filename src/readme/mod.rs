//! README generation.
//!
//! Loads the companies list and module catalog, turns them into the view the
//! template expects, renders it and writes the result. Each step returns a
//! [`Result`]; the first failure stops the run and nothing is written.

pub mod render;
pub mod view;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::catalog::Catalog;
use crate::companies::{build_companies_view, RawCompanies};
use crate::config::Config;
use crate::error::{Error, Result};

pub use render::{render, Renderer};
pub use view::{
    anchor, build_modules_view, sanitize_description, sanitize_entries, EntryView, ModuleView,
    RenderView, SubtopicView, TopicView, OFFICIAL_BADGE,
};

/// Counts reported after a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadmeStats {
    pub topics: usize,
    pub subtopics: usize,
    pub modules: usize,
    pub companies: usize,
}

impl ReadmeStats {
    pub fn from_view(view: &RenderView) -> Self {
        let mut stats = Self {
            topics: view.index.len(),
            companies: view.companies.len(),
            ..Self::default()
        };

        for topic in &view.index {
            if let Some(modules) = &topic.modules {
                stats.modules += modules.len();
            }
            if let Some(subtopics) = &topic.subtopic {
                stats.subtopics += subtopics.len();
                stats.modules += subtopics.iter().map(|s| s.modules.len()).sum::<usize>();
            }
        }

        stats
    }
}

/// Rendered README, not yet written anywhere
#[derive(Debug, Clone)]
pub struct Rendered {
    pub content: String,
    pub stats: ReadmeStats,
}

/// Result of writing the README
#[derive(Debug)]
pub struct BuildResult {
    pub output: PathBuf,
    pub bytes_written: usize,
    pub stats: ReadmeStats,
}

/// Outcome of comparing the rendered README with the file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate,
    Stale,
    Missing,
}

pub struct ReadmeGenerator {
    config: Config,
}

impl ReadmeGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.config.output.path)
    }

    /// Load all inputs and render the README in memory.
    pub fn render(&self) -> Result<Rendered> {
        let companies_source = self.config.companies_source();
        let raw_companies =
            RawCompanies::from_value(companies_source.load()?, &companies_source.location)?;

        let template_path = Path::new(&self.config.template.path);
        let template =
            fs::read_to_string(template_path).map_err(|e| Error::io(template_path, e))?;

        let modules_source = self.config.modules_source();
        let catalog = Catalog::from_value(modules_source.load()?, &modules_source.location)?;

        let view = RenderView {
            index: build_modules_view(catalog),
            companies: build_companies_view(raw_companies),
        };
        let stats = ReadmeStats::from_view(&view);

        let content = Renderer::new(self.config.template.autoescape).render(&template, &view)?;

        Ok(Rendered { content, stats })
    }

    /// Render and write the README. The output file is only replaced once
    /// rendering has succeeded.
    pub fn build(&self) -> Result<BuildResult> {
        let rendered = self.render()?;
        let output = self.output_path();

        write_atomic(&output, &rendered.content)?;

        Ok(BuildResult {
            output,
            bytes_written: rendered.content.len(),
            stats: rendered.stats,
        })
    }

    /// Render and compare with the existing output without writing.
    pub fn check(&self) -> Result<CheckOutcome> {
        let rendered = self.render()?;
        let output = self.output_path();

        if !output.exists() {
            return Ok(CheckOutcome::Missing);
        }

        // Compare bytes so a README that is not UTF-8 reads as stale
        let current = fs::read(&output).map_err(|e| Error::io(&output, e))?;
        if current == rendered.content.as_bytes() {
            Ok(CheckOutcome::UpToDate)
        } else {
            Ok(CheckOutcome::Stale)
        }
    }
}

/// Write `content` to a temporary file next to `path`, then rename it into
/// place so readers never see a partial file.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let mut file = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::io(file.path(), e))?;

    // Temp files are created 0600; keep the existing mode or use 0644
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mode = fs::metadata(path)
            .map(|m| m.permissions().mode())
            .unwrap_or(0o644);
        fs::set_permissions(file.path(), fs::Permissions::from_mode(mode))
            .map_err(|e| Error::io(file.path(), e))?;
    }

    file.persist(path).map_err(|e| Error::io(path, e.error))?;

    Ok(())
}
