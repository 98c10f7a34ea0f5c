//! Query normalization and file name matching
//!
//! Matching is a case-insensitive substring scan: the query is reduced to
//! its base name, lower-cased and stripped of a trailing extension, and a
//! candidate matches when its lower-cased name (extension retained)
//! contains that needle. The reveal action uses a stricter predicate:
//! case-insensitive equality against the raw query as typed. The asymmetry
//! is deliberate - a listed file is only openable when its name is exactly
//! what the user typed.

use std::path::Path;

/// A user-entered search term with its normalized form precomputed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    normalized: String,
}

impl Query {
    /// Build a query from the raw token the user typed
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let base = Path::new(raw)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(raw);
        let lowered = base.to_lowercase();
        let normalized = strip_extension(&lowered).to_string();
        Self {
            raw: raw.to_string(),
            normalized,
        }
    }

    /// Case-insensitive substring match against a candidate file name
    #[must_use]
    pub fn is_match(&self, candidate_name: &str) -> bool {
        candidate_name.to_lowercase().contains(&self.normalized)
    }

    /// Case-insensitive equality between a candidate base name and the
    /// raw query as typed; used only by the reveal action
    #[must_use]
    pub fn is_exact_name(&self, candidate_name: &str) -> bool {
        candidate_name.to_lowercase() == self.raw.to_lowercase()
    }

    /// The raw query as the user typed it
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized needle used for substring matching
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// Strip a trailing extension, taking everything from the last dot.
///
/// Unlike `Path::file_stem`, a name that is only an extension (".txt")
/// reduces to the empty string, which makes such a query match every file.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_stripped_from_query() {
        assert_eq!(Query::new("virmox.txt").normalized(), "virmox");
    }

    #[test]
    fn test_query_without_extension_is_unchanged() {
        assert_eq!(Query::new("nomatch").normalized(), "nomatch");
    }

    #[test]
    fn test_only_last_extension_is_stripped() {
        assert_eq!(Query::new("archive.tar.gz").normalized(), "archive.tar");
    }

    #[test]
    fn test_query_with_path_components_uses_base_name() {
        assert_eq!(Query::new("saves/virmox.txt").normalized(), "virmox");
    }

    #[test]
    fn test_extension_only_query_matches_everything() {
        let query = Query::new(".txt");
        assert_eq!(query.normalized(), "");
        assert!(query.is_match("anything.bin"));
        assert!(query.is_match("x"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let query = Query::new("VirMox.TXT");
        assert!(query.is_match("VIRMOX.txt"));
        assert!(query.is_match("my_virmox_save.dat"));
    }

    #[test]
    fn test_match_covers_backup_variants() {
        let query = Query::new("virmox.txt");
        assert!(query.is_match("virmox.txt"));
        assert!(query.is_match("virmox_backup.txt"));
    }

    #[test]
    fn test_no_match() {
        assert!(!Query::new("nomatch").is_match("virmox.txt"));
    }

    #[test]
    fn test_exact_name_uses_raw_query() {
        let query = Query::new("virmox.txt");
        assert!(query.is_exact_name("VIRMOX.TXT"));
        // substring matches are not exact matches
        assert!(!query.is_exact_name("virmox_backup.txt"));
        assert!(!query.is_exact_name("virmox"));
        assert_eq!(query.raw(), "virmox.txt");
    }
}
