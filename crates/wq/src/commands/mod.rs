//! Command implementations for the wq CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod completions;
pub mod config;
pub mod joggings;
pub mod parse;
pub mod users;

use std::path::PathBuf;

use tracing::debug;
use whereclause_rs::pagination::PaginationError;
use whereclause_rs::store::{Dataset, DatasetStore, StoreError};
use whereclause_rs::FilterError;

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Filter parsing or compilation error.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Invalid page request.
    #[error("pagination error: {0}")]
    Pagination(#[from] PaginationError),

    /// Dataset store error.
    #[error("dataset error: {0}")]
    Store(#[from] StoreError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Dataset file given on the command line or via `WQ_DATA`.
    pub data_path: Option<PathBuf>,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color,
            quiet: cli.quiet,
            data_path: cli.data.clone(),
        }
    }

    /// Applies config file preferences that the command line did not override.
    pub fn apply_config(&mut self, config: &config::Config) {
        if self.use_colors {
            self.use_colors = config.output.color.unwrap_or(true);
        }
        if self.data_path.is_none() {
            self.data_path = config.data_path.clone();
        }
    }

    /// Returns the dataset store for this invocation.
    ///
    /// Priority: `--data` flag (or `WQ_DATA`), then `data_path` from the
    /// config file, then the default XDG data path.
    pub fn store(&self) -> Result<DatasetStore> {
        match &self.data_path {
            Some(path) => Ok(DatasetStore::with_path(path)),
            None => Ok(DatasetStore::new()?),
        }
    }

    /// Loads the dataset, treating a missing file as an empty dataset.
    pub fn load_dataset(&self) -> Result<Dataset> {
        let store = self.store()?;
        if !store.exists() {
            debug!(path = %store.path().display(), "dataset file not found, using empty dataset");
        }
        Ok(store.load_or_default()?)
    }
}
