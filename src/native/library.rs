use std::ffi::{CStr, c_char, c_int, c_void};
use std::path::{Path, PathBuf};

use libloading::Library;
use tracing::{debug, info};

use super::runtime::{ContextHandle, GraphHandle, GraphvizRuntime, RawRenderData};
use crate::error::{GvError, Result};

type GvContextFn = unsafe extern "C" fn() -> *mut c_void;
type GvFreeContextFn = unsafe extern "C" fn(*mut c_void) -> c_int;
type AgMemReadFn = unsafe extern "C" fn(*const c_char) -> *mut c_void;
type AgCloseFn = unsafe extern "C" fn(*mut c_void) -> c_int;
type GvLayoutFn = unsafe extern "C" fn(*mut c_void, *mut c_void, *const c_char) -> c_int;
type GvFreeLayoutFn = unsafe extern "C" fn(*mut c_void, *mut c_void) -> c_int;
type GvRenderDataFn = unsafe extern "C" fn(
    *mut c_void,
    *mut c_void,
    *const c_char,
    *mut *mut c_char,
    *mut usize,
) -> c_int;
type GvFreeRenderDataFn = unsafe extern "C" fn(*mut c_char);

/// Platform file name of a shared library, e.g. `gvc.dll` or `libgvc.so`
pub fn library_file_name(name: &str) -> PathBuf {
    PathBuf::from(libloading::library_filename(name))
}

/// Graphviz `cgraph` and `gvc` opened from one install directory.
///
/// The function pointers are copied out of the libraries, which stay loaded
/// for as long as this value lives.
pub struct NativeLibrary {
    directory: PathBuf,
    gv_context: GvContextFn,
    gv_free_context: GvFreeContextFn,
    ag_memread: AgMemReadFn,
    ag_close: AgCloseFn,
    gv_layout: GvLayoutFn,
    gv_free_layout: GvFreeLayoutFn,
    gv_render_data: GvRenderDataFn,
    gv_free_render_data: GvFreeRenderDataFn,
    _gvc: Library,
    _cgraph: Library,
}

impl std::fmt::Debug for NativeLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeLibrary")
            .field("directory", &self.directory)
            .finish_non_exhaustive()
    }
}

fn open(directory: &Path, name: &str) -> Result<Library> {
    let path = directory.join(library_file_name(name));
    debug!(path = %path.display(), "opening native library");
    // SAFETY: Graphviz libraries run no initialisers with preconditions.
    unsafe { Library::new(&path) }.map_err(|source| GvError::LibraryLoad { path, source })
}

fn symbol<T: Copy>(library: &Library, library_name: &str, name: &'static str) -> Result<T> {
    // SAFETY: every symbol is looked up with the signature from the Graphviz
    // headers; the library outlives the copied pointer (see `NativeLibrary`).
    unsafe { library.get::<T>(name.as_bytes()) }
        .map(|sym| *sym)
        .map_err(|source| GvError::MissingSymbol {
            library: library_name.to_string(),
            symbol: name,
            source,
        })
}

impl NativeLibrary {
    /// Open both libraries from `directory` and resolve every entry point.
    pub fn load(directory: &Path) -> Result<Self> {
        let cgraph = open(directory, "cgraph")?;
        let gvc = open(directory, "gvc")?;

        let library = Self {
            directory: directory.to_path_buf(),
            gv_context: symbol(&gvc, "gvc", "gvContext")?,
            gv_free_context: symbol(&gvc, "gvc", "gvFreeContext")?,
            ag_memread: symbol(&cgraph, "cgraph", "agmemread")?,
            ag_close: symbol(&cgraph, "cgraph", "agclose")?,
            gv_layout: symbol(&gvc, "gvc", "gvLayout")?,
            gv_free_layout: symbol(&gvc, "gvc", "gvFreeLayout")?,
            gv_render_data: symbol(&gvc, "gvc", "gvRenderData")?,
            gv_free_render_data: symbol(&gvc, "gvc", "gvFreeRenderData")?,
            _gvc: gvc,
            _cgraph: cgraph,
        };

        info!(directory = %directory.display(), "loaded Graphviz libraries");
        Ok(library)
    }
}

impl GraphvizRuntime for NativeLibrary {
    fn open_context(&self) -> Option<ContextHandle> {
        // SAFETY: gvContext takes no arguments and returns an owned context.
        unsafe { ContextHandle::from_raw((self.gv_context)()) }
    }

    unsafe fn close_context(&self, context: ContextHandle) -> c_int {
        unsafe { (self.gv_free_context)(context.as_ptr()) }
    }

    fn read_graph(&self, description: &CStr) -> Option<GraphHandle> {
        // SAFETY: `description` is NUL-terminated; agmemread returns an owned
        // graph or null.
        unsafe { GraphHandle::from_raw((self.ag_memread)(description.as_ptr())) }
    }

    unsafe fn close_graph(&self, graph: GraphHandle) -> c_int {
        unsafe { (self.ag_close)(graph.as_ptr()) }
    }

    unsafe fn layout(&self, context: &ContextHandle, graph: &GraphHandle, engine: &CStr) -> c_int {
        unsafe { (self.gv_layout)(context.as_ptr(), graph.as_ptr(), engine.as_ptr()) }
    }

    unsafe fn free_layout(&self, context: &ContextHandle, graph: &GraphHandle) -> c_int {
        unsafe { (self.gv_free_layout)(context.as_ptr(), graph.as_ptr()) }
    }

    unsafe fn render_data(
        &self,
        context: &ContextHandle,
        graph: &GraphHandle,
        format: &CStr,
    ) -> std::result::Result<RawRenderData, c_int> {
        let mut data: *mut c_char = std::ptr::null_mut();
        // Older releases declare `unsigned int *length`; a zeroed usize reads
        // back correctly on little-endian targets either way.
        let mut length: usize = 0;
        let status = unsafe {
            (self.gv_render_data)(
                context.as_ptr(),
                graph.as_ptr(),
                format.as_ptr(),
                &mut data,
                &mut length,
            )
        };

        if status == 0 {
            Ok(RawRenderData { data, length })
        } else {
            Err(status)
        }
    }

    unsafe fn free_render_data(&self, data: *mut c_char) {
        unsafe { (self.gv_free_render_data)(data) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_file_name_follows_platform() {
        let name = library_file_name("gvc");
        let name = name.to_string_lossy();

        assert!(name.contains("gvc"));
        if cfg!(windows) {
            assert_eq!(name, "gvc.dll");
        } else if cfg!(target_os = "macos") {
            assert_eq!(name, "libgvc.dylib");
        } else {
            assert_eq!(name, "libgvc.so");
        }
    }

    #[test]
    fn test_load_from_empty_directory_fails_fast() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = NativeLibrary::load(temp.path()).unwrap_err();

        match err {
            GvError::LibraryLoad { path, .. } => {
                assert_eq!(path, temp.path().join(library_file_name("cgraph")));
            }
            other => panic!("Expected LibraryLoad, got {other:?}"),
        }
    }
}
