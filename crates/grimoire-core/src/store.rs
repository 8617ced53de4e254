//! Persistence capability and its JSON file implementation.
//!
//! Loading never fails outright: anything short of a good save yields a new
//! game, with the problem attached to the [`LoadReport`] as a warning. An
//! unparseable save is moved aside to `<path>.corrupt.<unix-seconds>` first so
//! nothing is lost.
//!
//! Saving writes the whole state to `<path>.tmp`, syncs it, and renames it over
//! `<path>`, so a crash mid-write leaves the previous save intact.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::state::State;

/// Default save file name.
pub const DEFAULT_SAVE_PATH: &str = "grimoire.json";

// =============================================================================
// Errors
// =============================================================================

/// Storage failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed.
    #[error("save file {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The save could not be parsed and was moved aside.
    #[error("save file {path} is corrupt ({source}); backed up to {backup}")]
    Corrupt {
        /// Original save location
        path: PathBuf,
        /// Where the unreadable file now lives
        backup: PathBuf,
        /// Parse failure
        #[source]
        source: serde_json::Error,
    },

    /// The state could not be encoded.
    #[error("failed to encode state: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// Outcome of [`Store::load`]: always a usable state, maybe a warning.
#[derive(Debug)]
pub struct LoadReport {
    /// State to play.
    pub state: State,
    /// Why `state` is a new game rather than the save, if it is.
    pub warning: Option<StoreError>,
}

impl LoadReport {
    fn fresh(warning: Option<StoreError>) -> Self {
        Self {
            state: State::default(),
            warning,
        }
    }
}

/// Where the game state persists between runs.
pub trait Store {
    /// Loads the saved state, falling back to a new game.
    fn load(&self) -> LoadReport;

    /// Persists the whole state atomically.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the state could not be written.
    fn save(&self, state: &State) -> Result<(), StoreError>;
}

/// Pretty-printed JSON save file.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store backed by the file at `path`. Nothing is touched yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Save file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(suffix);
        PathBuf::from(name)
    }

    /// First free `<path>.corrupt.<secs>[.<n>]` name.
    fn backup_path(&self) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        let suffix = format!(".corrupt.{stamp}");
        let mut backup = self.sibling(&suffix);
        let mut attempt = 1u32;
        while backup.exists() {
            backup = self.sibling(&format!("{suffix}.{attempt}"));
            attempt += 1;
        }
        backup
    }

    fn quarantine(&self, source: serde_json::Error) -> StoreError {
        let backup = self.backup_path();

        match fs::rename(&self.path, &backup) {
            Ok(()) => {
                tracing::warn!(path = %self.path.display(), backup = %backup.display(), %source, "corrupt save moved aside");
                StoreError::Corrupt {
                    path: self.path.clone(),
                    backup,
                    source,
                }
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "could not back up corrupt save");
                StoreError::io(&self.path, err)
            }
        }
    }
}

impl Store for JsonStore {
    fn load(&self) -> LoadReport {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no save, starting new game");
                return LoadReport::fresh(None);
            }
            Err(err) => return LoadReport::fresh(Some(StoreError::io(&self.path, err))),
        };

        match serde_json::from_slice::<State>(&bytes) {
            Ok(mut state) => {
                state.sanitize();
                tracing::debug!(path = %self.path.display(), "save loaded");
                LoadReport {
                    state,
                    warning: None,
                }
            }
            Err(err) => LoadReport::fresh(Some(self.quarantine(err))),
        }
    }

    fn save(&self, state: &State) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(state).map_err(StoreError::Serialize)?;
        let temp_path = self.sibling(".tmp");

        let mut file = fs::File::create(&temp_path).map_err(|e| StoreError::io(&temp_path, e))?;
        file.write_all(json.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| StoreError::io(&temp_path, e))?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), "state saved");
        Ok(())
    }
}
