//! Quire CLI - configuration and content tooling for documentation sites.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

use commands::snippet::SnippetArgs;
use commands::version::VersionCommand;

#[derive(Parser)]
#[command(name = "quire")]
#[command(about = "Configuration and content tooling for documentation sites")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the site config file (.json or .toml)
    #[arg(short, long, default_value = "docs-config.json", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the config file and report problems
    Check,

    /// Resolve and rewrite versioned paths
    Version {
        #[command(subcommand)]
        command: VersionCommand,
    },

    /// Generate request snippets for an API endpoint
    Snippet(SnippetArgs),

    /// Print enriched frontmatter for every page in a docs directory
    Frontmatter {
        /// Docs source directory
        #[arg(default_value = "docs")]
        dir: PathBuf,
    },

    /// Print SEO metadata and structured data for a page
    Seo {
        /// Content file
        file: PathBuf,

        /// Docs source directory the file lives in
        #[arg(short, long, default_value = "docs")]
        docs_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check => commands::check::run(&cli.config)?,
        Commands::Version { command } => commands::version::run(&cli.config, command)?,
        Commands::Snippet(args) => commands::snippet::run(args)?,
        Commands::Frontmatter { dir } => commands::frontmatter::run(&dir)?,
        Commands::Seo { file, docs_dir } => commands::seo::run(&cli.config, &file, &docs_dir)?,
    }

    Ok(())
}
