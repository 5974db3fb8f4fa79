//! CLI module for cherrypr
//!
//! Provides the command-line interface using clap. Running with no
//! arguments performs the whole flow.

pub mod commands;

use clap::Parser;
use std::path::PathBuf;

/// Cherrypr - Move a commit onto a fresh branch off the default branch and open a pull request
#[derive(Parser, Debug)]
#[command(name = "cherrypr")]
#[command(version)]
#[command(
    about = "Move a commit onto a fresh branch off the default branch and open a pull request"
)]
#[command(long_about = None)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Preview mutating git commands without executing them
    #[arg(long)]
    pub dry_run: bool,

    /// Override the working directory
    #[arg(long)]
    pub cwd: Option<PathBuf>,
}
