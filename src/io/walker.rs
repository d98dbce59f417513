use crate::errors::{MigrateError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Finds candidate source files beneath a root directory.
///
/// Every file whose name ends in `.<extension>` is returned, including ones under
/// hidden or git-ignored directories. Exclusion is opt-in through glob
/// patterns matched against the path relative to the root.
pub struct FileWalker {
    root: PathBuf,
    extension: String,
    exclude: Vec<glob::Pattern>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: crate::config::DEFAULT_EXTENSION.to_string(),
            exclude: vec![],
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_exclude_patterns(mut self, patterns: Vec<glob::Pattern>) -> Self {
        self.exclude = patterns;
        self
    }

    /// Walk the tree in file-name order and return matching paths.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.root).to_path_buf();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
                MigrateError::io(path, source)
            })?;
            let path = entry.path();

            if self.should_process(path) {
                files.push(path.to_path_buf());
            } else {
                tracing::trace!(path = %path.display(), "Skipping");
            }
        }

        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        // is_file follows symlinks, so linked files count as candidates
        if !path.is_file() || !self.has_target_extension(path) {
            return false;
        }

        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        !self.exclude.iter().any(|pattern| pattern.matches_path(relative))
    }

    // name-suffix match, so a bare `.dart` file is a candidate too
    fn has_target_extension(&self, path: &Path) -> bool {
        let suffix = format!(".{}", self.extension);
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(&suffix))
    }
}

pub fn find_source_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    FileWalker::new(root.to_path_buf())
        .with_extension(extension)
        .walk()
}
