//! Input path validation and opening.

use crate::config::DEFAULT_READ_BUFFER_BYTES;
use crate::error::{NanodiffError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Check that `path` exists and is a regular file, and make it canonical.
pub fn normalize_path(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(NanodiffError::path_not_found(path));
    }
    if !path.is_file() {
        return Err(NanodiffError::not_regular_file(path));
    }
    path.canonicalize().map_err(|e| NanodiffError::io(path, e))
}

/// An input ready to be handed to the diff engine.
pub struct OpenedInput {
    /// Canonical path, or the path as given when it was missing
    pub path: PathBuf,
    pub reader: Box<dyn BufRead>,
    /// Whether the path did not exist and is read as empty
    pub missing: bool,
}

impl std::fmt::Debug for OpenedInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenedInput")
            .field("path", &self.path)
            .field("missing", &self.missing)
            .finish_non_exhaustive()
    }
}

/// Validate and open `path` for reading.
///
/// With `missing_as_empty`, a path that does not exist is read as an empty
/// input. A path that exists but is not a regular file is always an error.
pub fn open_input(path: &Path, missing_as_empty: bool) -> Result<OpenedInput> {
    let canonical = match normalize_path(path) {
        Ok(canonical) => canonical,
        Err(NanodiffError::PathNotFound { .. }) if missing_as_empty => {
            tracing::debug!("{} not found, reading as empty", path.display());
            return Ok(OpenedInput {
                path: path.to_path_buf(),
                reader: Box::new(std::io::empty()),
                missing: true,
            });
        }
        Err(e) => return Err(e),
    };

    let file = File::open(&canonical).map_err(|e| NanodiffError::io(&canonical, e))?;
    tracing::debug!("Opened {}", canonical.display());

    Ok(OpenedInput {
        path: canonical,
        reader: Box::new(BufReader::with_capacity(DEFAULT_READ_BUFFER_BYTES, file)),
        missing: false,
    })
}
