//! Finding an installed Graphviz on disk

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, info};

use super::library::library_file_name;
use crate::constants::install::{BIN_DIR, DIR_PATTERN, REQUIRED_LIBRARIES, ROOTS};

/// Probe the standard install roots for Graphviz.
///
/// Returns the directory holding the shared libraries, or `None` when no
/// install was found or the first install found is missing a library.
pub fn discover_install_path() -> Option<PathBuf> {
    let roots: Vec<PathBuf> = ROOTS.iter().map(PathBuf::from).collect();
    discover_install_path_in(&roots)
}

/// Same as [`discover_install_path`] over caller-supplied roots.
///
/// Only the first directory matching the product name is considered: the
/// first root with a match wins and later roots are not consulted, even if
/// that match turns out to be incomplete.
pub fn discover_install_path_in(roots: &[PathBuf]) -> Option<PathBuf> {
    let install_dir = roots.iter().find_map(|root| first_matching_dir(root))?;
    let bin_dir = install_dir.join(BIN_DIR);

    let missing: Vec<PathBuf> = required_library_files()
        .into_iter()
        .filter(|file| !bin_dir.join(file).is_file())
        .collect();

    if missing.is_empty() {
        info!(path = %bin_dir.display(), "found Graphviz install");
        Some(bin_dir)
    } else {
        debug!(
            path = %bin_dir.display(),
            ?missing,
            "Graphviz install is missing required libraries"
        );
        None
    }
}

/// File names that must exist in the binaries directory
pub fn required_library_files() -> Vec<PathBuf> {
    REQUIRED_LIBRARIES
        .iter()
        .map(|name| library_file_name(name))
        .collect()
}

fn first_matching_dir(root: &Path) -> Option<PathBuf> {
    let pattern = format!(
        "{}{}{}",
        Pattern::escape(&root.to_string_lossy()),
        std::path::MAIN_SEPARATOR,
        DIR_PATTERN
    );
    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    debug!(%pattern, "probing install root");
    glob::glob_with(&pattern, options)
        .ok()?
        .filter_map(|entry| entry.ok())
        .find(|path| path.is_dir())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn install(root: &Path, name: &str, libraries: &[&str]) -> PathBuf {
        let bin = root.join(name).join(BIN_DIR);
        fs::create_dir_all(&bin).unwrap();
        for library in libraries {
            fs::write(bin.join(library_file_name(library)), b"").unwrap();
        }
        bin
    }

    #[test]
    fn test_finds_complete_install() {
        let root = TempDir::new().unwrap();
        let bin = install(root.path(), "Graphviz", &["cgraph", "gvc"]);

        let found = discover_install_path_in(&[root.path().to_path_buf()]);
        assert_eq!(found, Some(bin));
    }

    #[test]
    fn test_pattern_is_case_insensitive() {
        let root = TempDir::new().unwrap();
        let bin = install(root.path(), "GRAPH-VIZ 2.38", &["cgraph", "gvc"]);

        let found = discover_install_path_in(&[root.path().to_path_buf()]);
        assert_eq!(found, Some(bin));
    }

    #[test]
    fn test_missing_library_reports_not_found() {
        let root = TempDir::new().unwrap();
        install(root.path(), "graphviz", &["gvc"]);

        assert_eq!(discover_install_path_in(&[root.path().to_path_buf()]), None);
    }

    #[test]
    fn test_unrelated_directories_are_ignored() {
        let root = TempDir::new().unwrap();
        install(root.path(), "inkscape", &["cgraph", "gvc"]);

        assert_eq!(discover_install_path_in(&[root.path().to_path_buf()]), None);
    }

    #[test]
    fn test_falls_back_to_second_root() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let bin = install(second.path(), "graphviz", &["cgraph", "gvc"]);

        let found =
            discover_install_path_in(&[first.path().to_path_buf(), second.path().to_path_buf()]);
        assert_eq!(found, Some(bin));
    }

    #[test]
    fn test_first_match_wins_even_when_incomplete() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        install(first.path(), "graphviz", &["cgraph"]);
        install(second.path(), "graphviz", &["cgraph", "gvc"]);

        let found =
            discover_install_path_in(&[first.path().to_path_buf(), second.path().to_path_buf()]);
        assert_eq!(found, None);
    }

    #[test]
    fn test_missing_root_is_skipped() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("does-not-exist");

        assert_eq!(discover_install_path_in(&[missing]), None);
    }
}
