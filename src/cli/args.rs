//! Command-line argument parsing for the Performa service

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Performa - HTTP inference service for task-session performance prediction
#[derive(Parser, Debug)]
#[command(name = "performa")]
#[command(version = "0.1.0")]
#[command(about = "Serve a pre-trained performance classifier over HTTP", long_about = None)]
pub struct Args {
    /// Bind host (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides the config file)
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory containing the model, scaler and label encoder files
    #[arg(long, value_name = "DIR")]
    pub artifact_dir: Option<PathBuf>,

    /// Configuration file path (default: ./performa.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: default (normal), -v (verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress the startup banner and request logs)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the artifact files and exit non-zero if any is unusable
    Doctor,

    /// Display the resolved configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose > 0 {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

impl Verbosity {
    /// Check if the startup banner and per-request lines should print
    pub fn show_output(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if resolved paths and load details should print
    pub fn show_details(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            host: None,
            port: None,
            artifact_dir: None,
            config: None,
            verbose: 0,
            quiet: false,
            command: None,
        }
    }

    #[test]
    fn test_verbosity_normal() {
        let args = base_args();
        assert_eq!(args.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_quiet() {
        let args = Args {
            quiet: true,
            ..base_args()
        };
        assert_eq!(args.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_verbose() {
        let args = Args {
            verbose: 1,
            ..base_args()
        };
        assert_eq!(args.verbosity(), Verbosity::Verbose);
    }

    #[test]
    fn test_quiet_wins_over_verbose() {
        let args = Args {
            verbose: 2,
            quiet: true,
            ..base_args()
        };
        assert_eq!(args.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_output());
        assert!(Verbosity::Normal.show_output());
        assert!(Verbosity::Verbose.show_output());

        assert!(!Verbosity::Normal.show_details());
        assert!(Verbosity::Verbose.show_details());
    }

    #[test]
    fn test_parse_serve_flags() {
        let args = Args::parse_from([
            "performa",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--artifact-dir",
            "fitted",
        ]);
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.artifact_dir, Some(PathBuf::from("fitted")));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_doctor_subcommand() {
        let args = Args::parse_from(["performa", "doctor"]);
        assert!(matches!(args.command, Some(Commands::Doctor)));
    }
}
