//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the wq CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// wq - Query users and joggings with where-clause filters
#[derive(Parser, Debug)]
#[command(name = "wq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Dataset file (default: from config, then ~/.local/share/wq/dataset.json)
    #[arg(long, global = true, env = "WQ_DATA")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List users
    #[command(alias = "u")]
    Users {
        /// Filter expression (e.g., "role eq 'ADMIN' OR id lt 3")
        #[arg(short, long)]
        filter: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List joggings
    #[command(alias = "j")]
    Joggings {
        /// Filter expression (e.g., "distance gt 1000 AND date eq '2019-03-28'")
        #[arg(short, long)]
        filter: Option<String>,

        /// Only joggings owned by this user
        #[arg(short, long)]
        owner: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Parse a filter and print its structure
    Parse {
        /// Filter expression
        filter: String,

        /// Also compile the filter against a record type
        #[arg(short, long, value_enum)]
        record: Option<RecordKind>,
    },

    /// View and manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Pagination flags shared by the listing commands
#[derive(clap::Args, Debug, Default, Clone, Copy)]
pub struct PageArgs {
    /// Page number, starting at 1 (default: 1 when --per-page is given)
    #[arg(long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Records per page (default: 10 when --page is given)
    #[arg(long, allow_negative_numbers = true)]
    pub per_page: Option<i64>,
}

/// Record types a filter can be compiled against
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Jogging,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print config file path
    Path,

    /// Write a default config file if none exists
    Init,

    /// Set a configuration value
    Set {
        /// Configuration key (data_path, output.color)
        key: String,

        /// Value to set
        value: String,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}
