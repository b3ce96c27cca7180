//! In-memory runtime that records every native call

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::ffi::{CStr, c_char, c_int, c_void};

use crate::native::{ContextHandle, GraphHandle, GraphvizRuntime, RawRenderData};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounts {
    pub open_context: usize,
    pub close_context: usize,
    pub read_graph: usize,
    pub close_graph: usize,
    pub layout: usize,
    pub free_layout: usize,
    pub render_data: usize,
    pub free_render_data: usize,
}

#[derive(Default)]
pub struct MockRuntime {
    output: Vec<u8>,
    fail_context: bool,
    pub layout_status: Cell<c_int>,
    pub render_status: Cell<c_int>,
    pub free_layout_status: Cell<c_int>,
    pub close_graph_status: Cell<c_int>,
    pub close_context_status: Cell<c_int>,
    calls: Cell<CallCounts>,
    next_handle: Cell<usize>,
    closed_graphs: RefCell<Vec<usize>>,
    engines: RefCell<Vec<String>>,
    buffers: RefCell<HashMap<usize, usize>>,
    double_frees: Cell<usize>,
}

impl MockRuntime {
    pub fn with_output(output: &[u8]) -> Self {
        Self {
            output: output.to_vec(),
            ..Self::default()
        }
    }

    pub fn without_context() -> Self {
        Self {
            fail_context: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> CallCounts {
        self.calls.get()
    }

    pub fn engines(&self) -> Vec<String> {
        self.engines.borrow().clone()
    }

    pub fn closed_graphs(&self) -> Vec<usize> {
        self.closed_graphs.borrow().clone()
    }

    pub fn double_frees(&self) -> usize {
        self.double_frees.get()
    }

    pub fn live_buffers(&self) -> usize {
        self.buffers.borrow().len()
    }

    /// Hand out a copy of the configured output the way `gvRenderData` does
    pub fn allocate_render_data(&self) -> RawRenderData {
        let boxed: Box<[u8]> = self.output.clone().into_boxed_slice();
        let length = boxed.len();
        let data = Box::into_raw(boxed).cast::<c_char>();
        self.buffers.borrow_mut().insert(data as usize, length);
        RawRenderData { data, length }
    }

    fn record(&self, update: impl FnOnce(&mut CallCounts)) {
        let mut calls = self.calls.get();
        update(&mut calls);
        self.calls.set(calls);
    }

    fn next_ptr(&self) -> *mut c_void {
        let id = self.next_handle.get() + 1;
        self.next_handle.set(id);
        (0x1000 + id * 16) as *mut c_void
    }
}

fn balanced(description: &str) -> bool {
    let mut depth = 0i32;
    for c in description.chars() {
        match c {
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return false;
        }
    }
    depth == 0 && description.contains('{')
}

impl GraphvizRuntime for MockRuntime {
    fn open_context(&self) -> Option<ContextHandle> {
        self.record(|c| c.open_context += 1);
        if self.fail_context {
            return None;
        }
        unsafe { ContextHandle::from_raw(self.next_ptr()) }
    }

    unsafe fn close_context(&self, _context: ContextHandle) -> c_int {
        self.record(|c| c.close_context += 1);
        self.close_context_status.get()
    }

    fn read_graph(&self, description: &CStr) -> Option<GraphHandle> {
        self.record(|c| c.read_graph += 1);
        let text = description.to_str().ok()?;
        if !balanced(text) {
            return None;
        }
        unsafe { GraphHandle::from_raw(self.next_ptr()) }
    }

    unsafe fn close_graph(&self, graph: GraphHandle) -> c_int {
        self.record(|c| c.close_graph += 1);
        self.closed_graphs.borrow_mut().push(graph.as_ptr() as usize);
        self.close_graph_status.get()
    }

    unsafe fn layout(&self, _context: &ContextHandle, _graph: &GraphHandle, engine: &CStr) -> c_int {
        self.record(|c| c.layout += 1);
        self.engines
            .borrow_mut()
            .push(engine.to_string_lossy().into_owned());
        self.layout_status.get()
    }

    unsafe fn free_layout(&self, _context: &ContextHandle, _graph: &GraphHandle) -> c_int {
        self.record(|c| c.free_layout += 1);
        self.free_layout_status.get()
    }

    unsafe fn render_data(
        &self,
        _context: &ContextHandle,
        _graph: &GraphHandle,
        _format: &CStr,
    ) -> Result<RawRenderData, c_int> {
        self.record(|c| c.render_data += 1);
        match self.render_status.get() {
            0 => Ok(self.allocate_render_data()),
            status => Err(status),
        }
    }

    unsafe fn free_render_data(&self, data: *mut c_char) {
        self.record(|c| c.free_render_data += 1);
        if data.is_null() {
            return;
        }
        match self.buffers.borrow_mut().remove(&(data as usize)) {
            Some(length) => {
                let slice = std::ptr::slice_from_raw_parts_mut(data.cast::<u8>(), length);
                drop(unsafe { Box::from_raw(slice) });
            }
            None => self.double_frees.set(self.double_frees.get() + 1),
        }
    }
}
