//! CLI Module
//!
//! Command-line interface for writing and inspecting Gradle fixtures.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gradle Testkit - writes Gradle project fixtures to disk
#[derive(Parser, Debug)]
#[command(name = "gradle-testkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a project described in a JSON file
    #[command(name = "write")]
    Write {
        /// Path to the JSON project description
        description: PathBuf,

        /// Root directory to write into (overrides the description)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Check package declarations without writing anything
    #[command(name = "check")]
    Check {
        /// Path to the JSON project description
        description: PathBuf,
    },

    /// Print the SHA-256 digest of a written tree
    #[command(name = "digest")]
    Digest {
        /// Directory to hash
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_write_with_out() {
        let cli = Cli::parse_from(["gradle-testkit", "write", "demo.json", "--out", "build/demo"]);
        match cli.command {
            Commands::Write { description, out } => {
                assert_eq!(description, PathBuf::from("demo.json"));
                assert_eq!(out, Some(PathBuf::from("build/demo")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_global_verbose() {
        let cli = Cli::parse_from(["gradle-testkit", "digest", "build/demo", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Digest { .. }));
    }

    #[test]
    fn test_command_required() {
        assert!(Cli::try_parse_from(["gradle-testkit"]).is_err());
    }
}
