//! Cherrypr CLI - move a commit onto a fresh branch and open a pull request

use clap::Parser;
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cherrypr::cli::Cli;
use cherrypr::errors::FAILURE_EXIT_CODE;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr and default to warnings so they stay out of the prompts
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = cherrypr::cli::commands::run::run(cli.cwd.as_deref(), cli.dry_run).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            tracing::debug!(code = e.code(), "Run failed");
            eprintln!("{}", style(e.to_string()).red());
            std::process::exit(FAILURE_EXIT_CODE);
        }
    }
}
