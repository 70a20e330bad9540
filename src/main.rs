//! Gradle Testkit CLI
//!
//! Command-line interface for the Gradle fixture writer.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::debug;

use gradle_testkit::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    debug!("Gradle Testkit v{}", env!("CARGO_PKG_VERSION"));

    handle_command(cli.command)
}

fn handle_command(cmd: Commands) -> anyhow::Result<()> {
    match cmd {
        Commands::Write { description, out } => {
            commands::write_project(&description, out.as_deref())
                .with_context(|| format!("failed to write {}", description.display()))
        }
        Commands::Check { description } => commands::check_project(&description)
            .with_context(|| format!("check failed for {}", description.display())),
        Commands::Digest { path } => commands::print_digest(&path)
            .with_context(|| format!("failed to hash {}", path.display())),
    }
}
