// Dataset loading: reads the slate document once and hands out a shared,
// read-only handle.
//
// Loading never fails from the caller's point of view. A missing file or a
// document that is not a JSON array degrades to an empty dataset plus an
// error log; individual records that do not parse as a slate are skipped
// with a warning, as are player and game entries inside a slate.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use tracing::{error, info, warn};

use super::model::Slate;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read slate file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse slate file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("slate file {path} does not contain a JSON array")]
    NotAnArray { path: String },
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// Immutable collection of slates in document order.
///
/// Cloning is cheap and shares the underlying storage, so every clone refers
/// to the same slates (see [`Dataset::ptr_eq`]).
#[derive(Debug, Clone)]
pub struct Dataset {
    slates: Arc<[Slate]>,
}

impl Dataset {
    pub fn new(slates: Vec<Slate>) -> Self {
        Dataset {
            slates: slates.into(),
        }
    }

    pub fn empty() -> Self {
        Dataset::new(Vec::new())
    }

    pub fn slates(&self) -> &[Slate] {
        &self.slates
    }

    pub fn len(&self) -> usize {
        self.slates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slates.is_empty()
    }

    /// True when both handles share the same storage, not merely equal contents.
    pub fn ptr_eq(&self, other: &Dataset) -> bool {
        Arc::ptr_eq(&self.slates, &other.slates)
    }

    /// Parse a slate document from a reader.
    ///
    /// The top level must be a JSON array. Entries that fail to deserialize
    /// are skipped with a warning and the remaining slates are kept.
    pub fn from_reader<R: Read>(rdr: R, source: &str) -> Result<Self, LoadError> {
        let document: serde_json::Value =
            serde_json::from_reader(rdr).map_err(|e| LoadError::Parse {
                path: source.to_string(),
                source: e,
            })?;

        let serde_json::Value::Array(entries) = document else {
            return Err(LoadError::NotAnArray {
                path: source.to_string(),
            });
        };

        let mut slates = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Slate>(entry) {
                Ok(slate) => slates.push(slate),
                Err(e) => {
                    warn!("skipping malformed slate at index {} in {}: {}", idx, source, e);
                }
            }
        }
        Ok(Dataset::new(slates))
    }

    /// Parse a slate document from a file path.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Dataset::from_reader(std::io::BufReader::new(file), &path.display().to_string())
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Dataset::empty()
    }
}

/// Load the slate document at `path`, degrading to an empty dataset on failure.
pub fn load_dataset(path: &Path) -> Dataset {
    match Dataset::from_path(path) {
        Ok(dataset) => {
            info!("Loaded {} DFS slates from {}", dataset.len(), path.display());
            dataset
        }
        Err(e) => {
            error!("Error loading slate data: {}", e);
            Dataset::empty()
        }
    }
}

// ---------------------------------------------------------------------------
// DatasetLoader
// ---------------------------------------------------------------------------

/// Reads the slate document on first use and returns the same [`Dataset`]
/// on every later call.
///
/// There is no refresh: a failed first load memoizes the empty dataset for
/// the loader's lifetime. Construct one at startup and pass it (or the
/// dataset it yields) to whatever needs the slates.
#[derive(Debug)]
pub struct DatasetLoader {
    path: PathBuf,
    cache: OnceLock<Dataset>,
}

impl DatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DatasetLoader {
            path: path.into(),
            cache: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the memoized dataset, reading the file on the first call.
    pub fn load(&self) -> Dataset {
        self.cache.get_or_init(|| load_dataset(&self.path)).clone()
    }

    /// Whether the backing file has been read yet.
    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
