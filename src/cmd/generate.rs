//! README generation commands

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use awesome_readme::config::Config;
use awesome_readme::readme::{CheckOutcome, ReadmeGenerator, ReadmeStats};

/// Options shared by the generate and check commands
#[derive(Debug, Default)]
pub struct GenerateOptions {
    pub config: Option<PathBuf>,
    pub output: Option<String>,
    pub template: Option<String>,
    pub quiet: bool,
}

impl GenerateOptions {
    /// Load config and apply command-line overrides
    fn resolve_config(&self) -> Result<Config> {
        let mut config = super::load_config(self.config.as_deref())?;

        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if let Some(template) = &self.template {
            config.template.path = template.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

/// Render the README and write it to the output path
pub fn cmd_generate(options: &GenerateOptions) -> Result<()> {
    let config = options.resolve_config()?;

    if !options.quiet {
        print_sources(&config);
    }

    let generator = ReadmeGenerator::new(config);
    let result = generator
        .build()
        .context("README generation failed, output left untouched")?;

    if !options.quiet {
        print_stats(&result.stats);
        println!(
            "{} Wrote {} ({} bytes)",
            "✓".green(),
            result.output.display(),
            result.bytes_written
        );
    }

    Ok(())
}

/// Render the README and compare it with the file on disk
pub fn cmd_check(options: &GenerateOptions) -> Result<()> {
    let config = options.resolve_config()?;

    if !options.quiet {
        print_sources(&config);
    }

    let generator = ReadmeGenerator::new(config);
    let output = generator.output_path();

    match generator.check()? {
        CheckOutcome::UpToDate => {
            if !options.quiet {
                println!("{} {} is up to date", "✓".green(), output.display());
            }
            Ok(())
        }
        CheckOutcome::Stale => anyhow::bail!(
            "{} is out of date. Run `awesome-readme` to regenerate it.",
            output.display()
        ),
        CheckOutcome::Missing => anyhow::bail!(
            "{} does not exist. Run `awesome-readme` to generate it.",
            output.display()
        ),
    }
}

fn print_sources(config: &Config) {
    let companies = config.companies_source();
    println!(
        "{} Companies from {}{}",
        "→".cyan(),
        companies.location,
        if companies.remote {
            " (remote)".dimmed().to_string()
        } else {
            String::new()
        }
    );
    println!("{} Modules from {}", "→".cyan(), config.modules.path);
    println!("{} Template {}", "→".cyan(), config.template.path);
}

fn print_stats(stats: &ReadmeStats) {
    println!(
        "  {} topics, {} sub-topics, {} modules, {} companies",
        stats.topics, stats.subtopics, stats.modules, stats.companies
    );
}
