use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// URI scheme prefix VLC writes in front of local files.
///
/// Windows paths start with a drive letter, so the third slash belongs to the scheme there.
pub fn file_uri_prefix() -> &'static str {
    if cfg!(windows) { "file:///" } else { "file://" }
}

/// Converts any backslashes to the `/` form used for matching and storage.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Converts a `/`-separated path to the form the host's programs expect.
pub fn to_host(path: &str) -> String {
    if cfg!(windows) {
        path.replace('/', "\\")
    } else {
        path.to_string()
    }
}

/// The directory holding the series, and the single place where paths are
/// converted between absolute, relative and host form.
#[derive(Debug, Clone)]
pub struct WorkDir {
    root: PathBuf,
    prefix: String,
}

impl WorkDir {
    pub fn current() -> Result<Self> {
        let root = env::current_dir().context("unable to resolve the working directory")?;
        Ok(Self::new(root))
    }

    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let normalized = normalize_separators(&root.to_string_lossy());
        let prefix = match normalized.trim_end_matches('/') {
            "" => "/".to_string(),
            trimmed => format!("{trimmed}/"),
        };
        Self { root, prefix }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns `path` relative to this directory when it lies strictly below it.
    pub fn relative(&self, path: &str) -> Option<String> {
        let normalized = normalize_separators(path);
        normalized
            .strip_prefix(&self.prefix)
            .filter(|rest| !rest.is_empty())
            .map(str::to_string)
    }

    /// Relative form of `path` if it is an absolute path below this directory,
    /// otherwise `path` with normalized separators.
    pub fn to_relative(&self, path: &str) -> String {
        self.relative(path).unwrap_or_else(|| normalize_separators(path))
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.root.join(to_host(relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_strips_directory_prefix() {
        let dir = WorkDir::new("/media/shows/Series");
        assert_eq!(
            dir.relative("/media/shows/Series/S01/ep1.mkv").as_deref(),
            Some("S01/ep1.mkv")
        );
    }

    #[test]
    fn relative_rejects_sibling_with_shared_prefix() {
        let dir = WorkDir::new("/media/shows/Series");
        assert_eq!(dir.relative("/media/shows/Series 2/ep1.mkv"), None);
        assert_eq!(dir.relative("/media/shows/Series"), None);
        assert_eq!(dir.relative("/media/shows/Series/"), None);
    }

    #[test]
    fn relative_accepts_backslash_paths() {
        let dir = WorkDir::new("C:\\Videos\\Show");
        assert_eq!(
            dir.relative("C:\\Videos\\Show\\ep 2.mp4").as_deref(),
            Some("ep 2.mp4")
        );
        assert_eq!(dir.relative("C:/Videos/Show/ep 3.mp4").as_deref(), Some("ep 3.mp4"));
    }

    #[test]
    fn to_relative_passes_through_relative_paths() {
        let dir = WorkDir::new("/media/shows/Series");
        assert_eq!(dir.to_relative("S01\\ep1.mkv"), "S01/ep1.mkv");
        assert_eq!(dir.to_relative("/media/shows/Series/ep1.mkv"), "ep1.mkv");
    }

    #[test]
    fn root_directory_has_single_slash_prefix() {
        let dir = WorkDir::new("/");
        assert_eq!(dir.relative("/ep1.mp4").as_deref(), Some("ep1.mp4"));
    }

    #[cfg(unix)]
    #[test]
    fn host_form_is_unchanged_on_unix() {
        assert_eq!(to_host("S01/ep1.mkv"), "S01/ep1.mkv");
        assert_eq!(file_uri_prefix(), "file://");
    }
}
