//! Process-wide dynamic-library search path

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::constants::install::SEARCH_PATH_VAR;
use crate::error::{GvError, Result};

static SEARCH_PATH_LOCK: Mutex<()> = Mutex::new(());

/// Append each directory to the library search path variable unless an
/// identical entry is already present, then commit it to the environment.
///
/// The change lasts for the rest of the process.
pub fn extend_search_path<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    let _guard = SEARCH_PATH_LOCK
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);

    let current = env::var_os(SEARCH_PATH_VAR).unwrap_or_default();
    let Some(updated) = extended(&current, paths)? else {
        return Ok(());
    };

    debug!(var = SEARCH_PATH_VAR, value = ?updated, "extending library search path");
    // SAFETY: writers of this variable inside the crate are serialized by
    // SEARCH_PATH_LOCK; callers are told to construct renderers before
    // spawning threads that read the environment.
    unsafe { env::set_var(SEARCH_PATH_VAR, updated) };
    Ok(())
}

/// The new value of a search path variable, or `None` if nothing changes
///
/// Existing entries are kept exactly as they are, empty ones included.
fn extended<P: AsRef<Path>>(current: &OsString, paths: &[P]) -> Result<Option<OsString>> {
    let existing: Vec<PathBuf> = env::split_paths(current).collect();
    let mut added: Vec<PathBuf> = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let present = existing.iter().chain(&added).any(|entry| entry == path);
        if !present {
            env::join_paths([path]).map_err(|source| GvError::SearchPath {
                path: path.to_path_buf(),
                source,
            })?;
            added.push(path.to_path_buf());
        }
    }

    if added.is_empty() {
        return Ok(None);
    }

    let mut joined = current.clone();
    let tail = env::join_paths(&added).map_err(|source| GvError::SearchPath {
        path: PathBuf::new(),
        source,
    })?;
    // An unset or empty variable gets no leading separator.
    if !joined.is_empty() {
        joined.push(separator());
    }
    joined.push(tail);
    Ok(Some(joined))
}

fn separator() -> &'static str {
    if cfg!(windows) { ";" } else { ":" }
}
