//! The seam between the renderer and the Graphviz C API

use std::ffi::{CStr, c_char, c_int, c_void};
use std::ptr::NonNull;

/// Opaque `GVC_t*` owned by whoever created it
#[derive(Debug)]
pub struct ContextHandle(NonNull<c_void>);

/// Opaque `Agraph_t*` owned by whoever created it
#[derive(Debug)]
pub struct GraphHandle(NonNull<c_void>);

macro_rules! impl_handle {
    ($handle:ident) => {
        impl $handle {
            /// Wrap a pointer returned by the native library. Returns `None`
            /// for null.
            ///
            /// # Safety
            ///
            /// `ptr` must be a live handle of the right kind that nobody else
            /// will free.
            pub unsafe fn from_raw(ptr: *mut c_void) -> Option<Self> {
                NonNull::new(ptr).map(Self)
            }

            pub fn as_ptr(&self) -> *mut c_void {
                self.0.as_ptr()
            }
        }
    };
}

impl_handle!(ContextHandle);
impl_handle!(GraphHandle);

/// A native render result: `char*` plus length, owned by the caller until
/// passed to [`GraphvizRuntime::free_render_data`]
#[derive(Debug)]
pub struct RawRenderData {
    pub data: *mut c_char,
    pub length: usize,
}

/// The eight Graphviz entry points the renderer needs.
///
/// Calls block until the native library returns. Implementations are not
/// expected to be reentrant for the same context or graph.
pub trait GraphvizRuntime {
    /// `gvContext()`
    fn open_context(&self) -> Option<ContextHandle>;

    /// `gvFreeContext(gvc)`
    ///
    /// # Safety
    ///
    /// Every graph read through this context must already be closed.
    unsafe fn close_context(&self, context: ContextHandle) -> c_int;

    /// `agmemread(description)`
    fn read_graph(&self, description: &CStr) -> Option<GraphHandle>;

    /// `agclose(graph)`
    ///
    /// # Safety
    ///
    /// Any layout on `graph` must already be freed.
    unsafe fn close_graph(&self, graph: GraphHandle) -> c_int;

    /// `gvLayout(gvc, graph, engine)`
    ///
    /// # Safety
    ///
    /// Both handles must be live and come from this runtime.
    unsafe fn layout(&self, context: &ContextHandle, graph: &GraphHandle, engine: &CStr) -> c_int;

    /// `gvFreeLayout(gvc, graph)`
    ///
    /// # Safety
    ///
    /// Both handles must be live and come from this runtime.
    unsafe fn free_layout(&self, context: &ContextHandle, graph: &GraphHandle) -> c_int;

    /// `gvRenderData(gvc, graph, format, &result, &length)`
    ///
    /// # Safety
    ///
    /// `graph` must have a layout computed with `context`. On success the
    /// returned data must be released exactly once with
    /// [`free_render_data`](Self::free_render_data).
    unsafe fn render_data(
        &self,
        context: &ContextHandle,
        graph: &GraphHandle,
        format: &CStr,
    ) -> Result<RawRenderData, c_int>;

    /// `gvFreeRenderData(data)`
    ///
    /// # Safety
    ///
    /// `data` must come from [`render_data`](Self::render_data) and not have
    /// been freed yet.
    unsafe fn free_render_data(&self, data: *mut c_char);
}
