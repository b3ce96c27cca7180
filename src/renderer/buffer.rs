use std::ffi::c_char;
use std::io::Cursor;
use std::ops::Deref;

use crate::native::{GraphvizRuntime, RawRenderData};

/// Render output still living in native memory.
///
/// Reads go straight to the native buffer; nothing is copied until
/// `to_vec` is called. The buffer is handed back to the
/// native library exactly once, by [`release`](Self::release) or on drop.
pub struct RenderBuffer<'rt, R: GraphvizRuntime + ?Sized> {
    runtime: &'rt R,
    data: *mut c_char,
    length: usize,
    released: bool,
}

impl<'rt, R: GraphvizRuntime + ?Sized> RenderBuffer<'rt, R> {
    /// # Safety
    ///
    /// `raw` must come from `runtime.render_data` and not be freed elsewhere.
    pub unsafe fn new(runtime: &'rt R, raw: RawRenderData) -> Self {
        Self {
            runtime,
            data: raw.data,
            length: raw.length,
            released: false,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        if self.data.is_null() || self.length == 0 {
            return &[];
        }
        // SAFETY: the native library hands out `length` initialised bytes
        // that stay valid until `free_render_data`, which needs `&mut self`.
        unsafe { std::slice::from_raw_parts(self.data.cast::<u8>(), self.length) }
    }

    /// Stream over the native bytes
    pub fn reader(&self) -> Cursor<&[u8]> {
        Cursor::new(self.as_bytes())
    }

    pub fn release(mut self) {
        self.free();
    }

    fn free(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        // SAFETY: guarded by `released`, so the pointer is freed only once.
        unsafe { self.runtime.free_render_data(self.data) };
    }
}

impl<R: GraphvizRuntime + ?Sized> Deref for RenderBuffer<'_, R> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<R: GraphvizRuntime + ?Sized> AsRef<[u8]> for RenderBuffer<'_, R> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<R: GraphvizRuntime + ?Sized> Drop for RenderBuffer<'_, R> {
    fn drop(&mut self) {
        self.free();
    }
}

impl<R: GraphvizRuntime + ?Sized> std::fmt::Debug for RenderBuffer<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderBuffer")
            .field("length", &self.length)
            .field("released", &self.released)
            .finish()
    }
}
