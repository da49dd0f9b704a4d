//! Extpack - browser extension packager.
//!
//! Copies extension assets into a distributable directory:
//! - locale bundles, icons, and sounds copied verbatim
//! - popup/options HTML rendered from `{{ VAR }}` templates
//! - manifest.json patched with the package version (and a relaxed CSP
//!   for development builds)

mod clean;
mod commands;
mod common;
mod config;
mod manifest;
mod pack;
mod preflight;
mod rules;
mod template;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use config::{BuildMode, Config};

#[derive(Parser)]
#[command(name = "extpack")]
#[command(about = "Browser extension packager")]
#[command(
    after_help = "QUICK START:\n  extpack preflight  Check source tree inputs\n  extpack pack       Package the extension into dist/\n  extpack clean      Remove dist/"
)]
struct Cli {
    /// Extension project root (default: current directory)
    #[arg(short = 'C', long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Package the extension into the dist directory
    Pack {
        /// Build mode: development|production (default: from config)
        #[arg(long)]
        mode: Option<String>,

        /// Version to inject into the manifest (default: package.json)
        #[arg(long)]
        version: Option<String>,
    },

    /// Remove the dist directory
    Clean,

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },

    /// Check source tree inputs before packaging
    Preflight {
        /// Fail if any checks fail (exit code 1)
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show current configuration
    Config,
    /// Show the packaging rule table
    Rules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let base_dir = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    // Load .env if present
    dotenvy::from_path(base_dir.join(".env")).ok();
    let config = Config::load(&base_dir)?;

    match cli.command {
        Commands::Pack { mode, version } => {
            let mode = mode.as_deref().map(BuildMode::parse).transpose()?;
            commands::cmd_pack(&base_dir, &config, mode, version.as_deref())?;
        }

        Commands::Clean => {
            commands::cmd_clean(&config)?;
        }

        Commands::Show { what } => {
            let show_target = match what {
                ShowTarget::Config => commands::show::ShowTarget::Config,
                ShowTarget::Rules => commands::show::ShowTarget::Rules,
            };
            commands::cmd_show(show_target, &config)?;
        }

        Commands::Preflight { strict } => {
            commands::cmd_preflight(&base_dir, &config, strict)?;
        }
    }

    Ok(())
}
