//! CLI entry point for awesome-readme.

mod cmd;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "awesome-readme")]
#[command(version)]
#[command(about = "Generate the Awesome Moleculer README from YAML catalogs", long_about = None)]
#[command(
    after_help = "INPUTS:\n    companies.yml                  Companies using Moleculer, grouped\n    modules.yml                    Module catalog (topics, sub-topics, entries)\n    templates/readme-template.md   Tera template for the README\n\n    Paths can be changed in .awesome-readme.yml."
)]
struct Cli {
    /// Config file to use instead of .awesome-readme.yml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Write the README to this path
    #[arg(long, short, value_name = "PATH")]
    output: Option<String>,
    /// Template to render
    #[arg(long, value_name = "PATH")]
    template: Option<String>,
    /// Fail if the README is missing or out of date, without writing it
    #[arg(long)]
    check: bool,
    /// Only print errors
    #[arg(long, short)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = cmd::generate::GenerateOptions {
        config: cli.config,
        output: cli.output,
        template: cli.template,
        quiet: cli.quiet,
    };

    if cli.check {
        cmd::generate::cmd_check(&options)
    } else {
        cmd::generate::cmd_generate(&options)
    }
}
