//! File updater: read, normalize, write back only when something changed.

use crate::error::FileError;
use crate::transform::normalize_title_quotes;
use std::borrow::Cow;
use std::io;
use std::path::Path;
use tracing::{debug, trace};

/// Access to document contents.
///
/// The filesystem implementation is [`LocalStore`]; tests plug in stores that
/// count writes or inject failures.
pub trait DocumentStore {
    /// Read the whole document as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace the whole document.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Plain filesystem store.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

impl DocumentStore for LocalStore {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content changed and was written back
    Fixed,
    /// Content would change, but this is a dry run
    WouldFix,
    /// Nothing to do; no write performed
    Unchanged,
}

/// Updater options
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOptions {
    /// Report changes without writing them
    pub dry_run: bool,
}

/// Process a single file through `store`.
pub fn update_file<S: DocumentStore + ?Sized>(
    store: &S,
    path: &Path,
    options: UpdateOptions,
) -> Result<FileOutcome, FileError> {
    let content = store.read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let fixed = match normalize_title_quotes(&content) {
        Cow::Borrowed(_) => {
            trace!(path = %path.display(), "No malformed title");
            return Ok(FileOutcome::Unchanged);
        }
        Cow::Owned(fixed) => fixed,
    };

    if options.dry_run {
        debug!(path = %path.display(), "Dry run, skipping write");
        return Ok(FileOutcome::WouldFix);
    }

    store
        .write(path, &fixed)
        .map_err(|source| FileError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), bytes = fixed.len(), "Rewrote title");

    Ok(FileOutcome::Fixed)
}
