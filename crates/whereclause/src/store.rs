//! Dataset file storage with XDG path support.
//!
//! The dataset holds the users and joggings that filters run against. It is
//! stored as JSON at `~/.local/share/wq/dataset.json` by default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{Jogging, User};

/// Default dataset filename.
const DATASET_FILENAME: &str = "dataset.json";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "wq";

/// Errors that can occur during dataset storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to determine the XDG data directory.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    /// I/O error during file read.
    #[error("failed to read dataset file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during file write.
    #[error("failed to write dataset file '{path}': {source}")]
    WriteError {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during directory creation.
    #[error("failed to create data directory '{path}': {source}")]
    CreateDirError {
        /// The directory path that failed to create.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for dataset store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// All records available to queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Registered users.
    #[serde(default)]
    pub users: Vec<User>,

    /// Jogging sessions of all users.
    #[serde(default)]
    pub joggings: Vec<Jogging>,
}

/// Persistent storage for the dataset.
///
/// # Example
///
/// ```no_run
/// use whereclause_rs::store::DatasetStore;
///
/// let store = DatasetStore::new()?;
/// let dataset = store.load_or_default()?;
/// println!("{} users", dataset.users.len());
/// # Ok::<(), whereclause_rs::store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DatasetStore {
    path: PathBuf,
}

impl DatasetStore {
    /// Creates a store at the default XDG data path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoDataDir` if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: Self::default_path()?,
        })
    }

    /// Creates a store at a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default XDG path for the dataset file.
    ///
    /// On Unix: `~/.local/share/wq/dataset.json`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoDataDir` if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs =
            ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or(StoreError::NoDataDir)?;
        Ok(project_dirs.data_dir().join(DATASET_FILENAME))
    }

    /// Returns the path to the dataset file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the dataset file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the dataset from disk.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::ReadError` if the file cannot be read.
    /// - Returns `StoreError::Json` if the file contains invalid JSON.
    pub fn load(&self) -> Result<Dataset> {
        let contents = fs::read_to_string(&self.path).map_err(|e| StoreError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;
        let dataset: Dataset = serde_json::from_str(&contents)?;
        debug!(
            path = %self.path.display(),
            users = dataset.users.len(),
            joggings = dataset.joggings.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Loads the dataset, returning an empty one if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load), except for a missing file.
    pub fn load_or_default(&self) -> Result<Dataset> {
        match self.load() {
            Ok(dataset) => Ok(dataset),
            Err(StoreError::ReadError { ref source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                Ok(Dataset::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Saves the dataset as pretty-printed JSON.
    ///
    /// Creates the parent directory if needed and writes through a temporary
    /// file followed by a rename.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::CreateDirError` if the directory cannot be created.
    /// - Returns `StoreError::WriteError` if the file cannot be written.
    /// - Returns `StoreError::Json` if serialization fails.
    pub fn save(&self, dataset: &Dataset) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::CreateDirError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(dataset)?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &json).map_err(|e| StoreError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }
}
