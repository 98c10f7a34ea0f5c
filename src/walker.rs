//! Recursive directory traversal
//!
//! The walk visits every entry under the root depth-first, including the
//! root itself, and collects the full paths of non-directory entries whose
//! name matches the query, in traversal order. Permission-denied entries
//! are skipped silently; any other traversal error aborts the walk,
//! carrying whatever was collected so far.
//!
//! The traversal sits behind the [`Walk`] trait so the session can be
//! exercised with a mock, the same seam the reveal capability uses.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::matcher::Query;
use crate::spinner::Spinner;

/// A traversal that could not run to completion
///
/// Matches collected before the failing entry are preserved so the caller
/// can still present partial results.
#[derive(Debug, Error)]
#[error("Traversal aborted: {source}")]
pub struct WalkError {
    /// Matches collected before the traversal aborted
    pub partial: Vec<PathBuf>,
    /// The underlying traversal error
    #[source]
    pub source: io::Error,
}

/// Capability for running one search walk over a directory tree
pub trait Walk {
    /// Walk the tree under `root`, collecting files whose name matches
    /// `query`, in traversal order.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError`] when the traversal aborts; the error carries
    /// the matches collected so far.
    fn walk(&self, root: &Path, query: &Query) -> Result<Vec<PathBuf>, WalkError>;
}

/// The real filesystem walker
///
/// The progress spinner runs for the duration of the traversal and is
/// stopped - its status line cleared - before `walk` returns, on both the
/// success and error paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeWalker;

impl Walk for TreeWalker {
    fn walk(&self, root: &Path, query: &Query) -> Result<Vec<PathBuf>, WalkError> {
        let spinner = Spinner::start();
        let result = collect_matches(root, query);
        spinner.stop();
        result
    }
}

fn collect_matches(root: &Path, query: &Query) -> Result<Vec<PathBuf>, WalkError> {
    let mut matches = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_permission_denied(&err) => continue,
            Err(err) => {
                return Err(WalkError {
                    partial: matches,
                    source: err.into(),
                });
            }
        };
        // Directories are never candidates, only their contents.
        if entry.file_type().is_dir() {
            continue;
        }
        if query.is_match(&entry.file_name().to_string_lossy()) {
            matches.push(entry.into_path());
        }
    }
    Ok(matches)
}

fn is_permission_denied(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|io_err| io_err.kind() == io::ErrorKind::PermissionDenied)
}

/// Mock walker serving predetermined outcomes
///
/// Each call to `walk` pops the next scripted outcome; once the script is
/// exhausted every walk succeeds with no matches.
#[derive(Debug, Default)]
pub struct MockWalk {
    outcomes: RefCell<VecDeque<Result<Vec<PathBuf>, WalkError>>>,
}

impl MockWalk {
    /// Create a mock walker with an empty script
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next walk
    pub fn push(&self, outcome: Result<Vec<PathBuf>, WalkError>) {
        self.outcomes.borrow_mut().push_back(outcome);
    }
}

impl Walk for MockWalk {
    fn walk(&self, _root: &Path, _query: &Query) -> Result<Vec<PathBuf>, WalkError> {
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"test content").unwrap();
    }

    #[test]
    fn test_empty_tree_yields_no_matches() {
        let dir = tempfile::tempdir().unwrap();
        let files = TreeWalker.walk(dir.path(), &Query::new("anything")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_substring_match_over_stripped_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("virmox.txt"));
        touch(&dir.path().join("virmox_backup.txt"));
        touch(&dir.path().join("other.txt"));

        let files = TreeWalker
            .walk(dir.path(), &Query::new("virmox.txt"))
            .unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.ends_with("virmox.txt")));
        assert!(files.iter().any(|f| f.ends_with("virmox_backup.txt")));
    }

    #[test]
    fn test_no_match_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("virmox.txt"));
        let files = TreeWalker.walk(dir.path(), &Query::new("nomatch")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_nested_directories_are_visited() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        touch(&nested.join("deep_virmox.sav"));

        let files = TreeWalker.walk(dir.path(), &Query::new("virmox")).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("deep_virmox.sav"));
    }

    #[test]
    fn test_directories_are_not_candidates() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("virmox.txt")).unwrap();
        let files = TreeWalker
            .walk(dir.path(), &Query::new("virmox.txt"))
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_file_root_is_a_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("virmox.txt");
        touch(&file);
        let files = TreeWalker.walk(&file, &Query::new("virmox")).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_missing_root_aborts_with_empty_partial() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let err = TreeWalker.walk(&missing, &Query::new("x")).unwrap_err();
        assert!(err.partial.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_denied_subtree_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("virmox.txt"));
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        touch(&locked.join("virmox_hidden.txt"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root bypasses permission bits, so only assert on what holds
        // either way: the walk completes and finds the accessible file.
        let files = TreeWalker.walk(dir.path(), &Query::new("virmox")).unwrap();
        assert!(files.iter().any(|f| f.ends_with("virmox.txt")));

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_mock_serves_outcomes_in_order() {
        let mock = MockWalk::new();
        mock.push(Ok(vec![PathBuf::from("/tmp/a.txt")]));
        mock.push(Err(WalkError {
            partial: Vec::new(),
            source: io::Error::other("boom"),
        }));

        let query = Query::new("a");
        let first = mock.walk(Path::new("/tmp"), &query).unwrap();
        assert_eq!(first, vec![PathBuf::from("/tmp/a.txt")]);
        assert!(mock.walk(Path::new("/tmp"), &query).is_err());
        // script exhausted: walks succeed with no matches
        assert!(mock.walk(Path::new("/tmp"), &query).unwrap().is_empty());
    }
}
