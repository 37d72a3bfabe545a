//! Filesystem walker for finding documentation files

use crate::error::FixError;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Extensions selected when nothing else is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Filesystem walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// File name suffixes to select, without the leading dot
    pub extensions: Vec<String>,
    /// Whether to follow symbolic links into directories
    pub follow_symlinks: bool,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

impl WalkerConfig {
    /// Config selecting the given extensions. A leading dot is accepted.
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| normalize_extension(e.as_ref()))
                .collect(),
            ..Self::default()
        }
    }
}

/// Strip surrounding whitespace and one leading dot.
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    ext.strip_prefix('.').unwrap_or(ext).to_string()
}

/// Documentation file walker
pub struct Walker {
    root: PathBuf,
    suffixes: Vec<String>,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self::with_config(root, WalkerConfig::default())
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        let suffixes = config
            .extensions
            .iter()
            .map(|ext| format!(".{}", normalize_extension(ext)))
            .collect();
        Self {
            root,
            suffixes,
            config,
        }
    }

    /// Lazily yield every matching file under the root.
    ///
    /// Entries come out in file-name order within each directory. Fails up
    /// front if the root is missing or is not a directory; errors met while
    /// descending are yielded as items so the caller can keep going.
    pub fn files(&self) -> Result<impl Iterator<Item = Result<PathBuf, FixError>> + '_, FixError> {
        let metadata = std::fs::metadata(&self.root).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FixError::RootNotFound(self.root.clone()),
            _ => FixError::Walk(format!("{}: {}", self.root.display(), e)),
        })?;
        if !metadata.is_dir() {
            return Err(FixError::RootNotDirectory(self.root.clone()));
        }

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .sort_by_file_name();

        Ok(walker.into_iter().filter_map(move |entry| match entry {
            Ok(entry) if self.is_candidate(&entry) => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(e) => Some(Err(FixError::from(e))),
        }))
    }

    /// Collect all matching files.
    pub fn walk(&self) -> Result<Vec<PathBuf>, FixError> {
        self.files()?.collect()
    }

    fn is_candidate(&self, entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        is_file && self.matches_extension(entry.file_name().to_string_lossy().as_ref())
    }

    /// Case-sensitive suffix match on the file name.
    pub fn matches_extension(&self, file_name: &str) -> bool {
        self.suffixes
            .iter()
            .any(|suffix| file_name.ends_with(suffix.as_str()))
    }
}
