// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::render::RenderTarget;

/// commitrc - commit-message policy for commitlint
///
/// Declares which commitlint rules apply to this project and exports them
/// in the format commitlint loads.
#[derive(Parser, Debug)]
#[command(name = "commitrc")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit-message policy for commitlint", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to show if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "COMMITRC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the effective policy (default command)
    Show(ShowArgs),

    /// Write the policy in a format commitlint loads
    Export(ExportArgs),

    /// Create a commitrc.toml spelling out the built-in policy
    Init(InitArgs),

    /// Check whether messages are exempt from all rules
    CheckIgnore(CheckIgnoreArgs),

    /// Print version information
    Version,
}

/// Arguments for the show command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ShowArgs {
    /// Show a single rule
    #[arg(short, long, value_name = "NAME")]
    pub rule: Option<String>,
}

/// Arguments for the export command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ExportArgs {
    /// What to render
    #[arg(short, long, value_enum, default_value_t = RenderTarget::Module)]
    pub target: RenderTarget,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the check-ignore command.
#[derive(Parser, Debug, Clone)]
pub struct CheckIgnoreArgs {
    /// Commit or range to check
    #[arg(default_value = "HEAD", conflicts_with_all = ["message", "file"])]
    pub target: String,

    /// Check this message text instead of a commit
    #[arg(short, long, conflicts_with = "file")]
    pub message: Option<String>,

    /// Read the message from a file ("-" for stdin), e.g. in a commit-msg hook
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Get the effective command, defaulting to Show if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Show(ShowArgs::default()))
    }
}

impl Default for CheckIgnoreArgs {
    fn default() -> Self {
        Self {
            target: "HEAD".to_string(),
            message: None,
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_rule() {
        let args = Cli::parse_from(["commitrc", "show", "--rule", "type-enum"]);
        if let Some(Commands::Show(show)) = args.command {
            assert_eq!(show.rule.as_deref(), Some("type-enum"));
        } else {
            panic!("Expected Show command");
        }
    }

    #[test]
    fn test_parse_export() {
        let args = Cli::parse_from(["commitrc", "export", "--target", "json", "-o", "out.json"]);
        if let Some(Commands::Export(export)) = args.command {
            assert_eq!(export.target, RenderTarget::Json);
            assert_eq!(export.output, Some(PathBuf::from("out.json")));
            assert!(!export.force);
        } else {
            panic!("Expected Export command");
        }
    }

    #[test]
    fn test_parse_check_ignore_range() {
        let args = Cli::parse_from(["commitrc", "check-ignore", "main..HEAD"]);
        if let Some(Commands::CheckIgnore(check)) = args.command {
            assert_eq!(check.target, "main..HEAD");
            assert!(check.message.is_none());
        } else {
            panic!("Expected CheckIgnore command");
        }
    }

    #[test]
    fn test_parse_check_ignore_conflicts() {
        let result = Cli::try_parse_from([
            "commitrc",
            "check-ignore",
            "--message",
            "x",
            "--file",
            "msg.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["commitrc", "--format", "json", "--no-color", "show"]);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(args.no_color);
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["commitrc"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Show(_)));
    }
}
