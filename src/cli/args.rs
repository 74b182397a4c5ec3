//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--data <path>`: Fixture file to load (overrides config)
//! - `--json`: Machine-readable output
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rollbook - query student and course rosters from a fixture file
#[derive(Parser, Debug)]
#[command(name = "rollbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Fixture file with students and courses (.toml or .json)
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; suppresses status lines and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Query students
    Students {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Query courses
    Courses {
        #[command(subcommand)]
        action: CourseAction,
    },

    /// Load the fixture and report counts and warnings
    Check,

    /// Generate shell completion scripts
    #[command(after_help = "\
EXAMPLES:
    # Bash
    rollbook completion bash > ~/.local/share/bash-completion/completions/rollbook

    # Zsh
    rollbook completion zsh > ~/.zfunc/_rollbook")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum StudentAction {
    /// List every student in insertion order
    List,

    /// Show the student with the given id
    Get {
        /// Student id
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },

    /// Find students by exact name or email
    Find {
        /// Match every student with this name
        #[arg(long, conflicts_with = "email", required_unless_present = "email")]
        name: Option<String>,

        /// Match the first student with this email
        #[arg(long)]
        email: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum CourseAction {
    /// List every course in insertion order
    List,

    /// Show the course with the given id
    Get {
        /// Course id
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },

    /// Find courses by exact name or start date
    Find {
        /// Match every course with this name
        #[arg(long, conflicts_with = "date", required_unless_present = "date")]
        name: Option<String>,

        /// Match every course starting on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List the students registered for a course
    Roster {
        /// Course id
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_course_find_by_date() {
        let cli = Cli::try_parse_from([
            "rollbook",
            "--data",
            "roster.toml",
            "courses",
            "find",
            "--date",
            "2024-09-02",
        ])
        .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("roster.toml")));
        match cli.command {
            Command::Courses {
                action: CourseAction::Find { name, date },
            } => {
                assert!(name.is_none());
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 9, 2));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn student_find_needs_exactly_one_filter() {
        assert!(Cli::try_parse_from(["rollbook", "students", "find"]).is_err());
        assert!(Cli::try_parse_from([
            "rollbook", "students", "find", "--name", "A", "--email", "a@x.io"
        ])
        .is_err());
    }

    #[test]
    fn negative_ids_parse() {
        let cli = Cli::try_parse_from(["rollbook", "students", "get", "-4"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Students {
                action: StudentAction::Get { id: -4 }
            }
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["rollbook", "check", "--json", "-q"]).unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
    }
}
