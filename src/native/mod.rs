//! # Native Library Locator & Binder
//!
//! Makes the Graphviz C entry points callable:
//!
//! - **discovery**: probes the standard install roots for a Graphviz
//!   directory holding every required shared library
//! - **search_path**: appends install directories to the process-wide
//!   dynamic-library search path
//! - **library**: opens `cgraph` and `gvc` and resolves their entry points
//! - **runtime**: the [`GraphvizRuntime`] trait the renderer talks to, plus
//!   the opaque handle types
//!
//! [`load_runtime`] ties these together and runs at most once per install
//! directory for the lifetime of the process.

mod discovery;
mod library;
mod runtime;
mod search_path;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use once_cell::sync::Lazy;
use tracing::debug;

pub use discovery::{discover_install_path, discover_install_path_in, required_library_files};
pub use library::{NativeLibrary, library_file_name};
pub use runtime::{ContextHandle, GraphHandle, GraphvizRuntime, RawRenderData};
pub use search_path::extend_search_path;

use crate::error::Result;

static LOADED: Lazy<Mutex<HashMap<PathBuf, Arc<NativeLibrary>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Extend the search path with `directory` and load Graphviz from it.
///
/// The first successful call for a directory does the work; later calls get
/// the same library back. Failed loads are not cached.
pub fn load_runtime(directory: &Path) -> Result<Arc<NativeLibrary>> {
    let mut loaded = LOADED.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(library) = loaded.get(directory) {
        debug!(directory = %directory.display(), "reusing loaded Graphviz libraries");
        return Ok(Arc::clone(library));
    }

    extend_search_path(&[directory])?;
    let library = Arc::new(NativeLibrary::load(directory)?);
    loaded.insert(directory.to_path_buf(), Arc::clone(&library));
    Ok(library)
}
