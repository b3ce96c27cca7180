//! # Renderer Facade
//!
//! [`GraphRenderer`] owns one Graphviz context and at most one parsed graph,
//! and turns DOT text into rendered output:
//!
//! ```text
//! new / with_install_path ──► Ready ──create_graph──► GraphLoaded
//!                               ▲                        │
//!                               └──── dispose_graph ─────┘
//!                     dispose (from any state) ──► Disposed
//! ```
//!
//! Every render cycle computes a layout, renders into a native buffer,
//! hands the buffer to the caller through a [`RenderBuffer`] and frees the
//! layout again. The graph stays loaded afterwards so it can be rendered
//! with another engine or format.

mod buffer;
#[cfg(test)]
mod mock;

use std::ffi::CString;
use std::path::Path;
use std::sync::Arc;

use image::{DynamicImage, ImageReader};
use tracing::{debug, warn};

pub use buffer::RenderBuffer;

use crate::constants::{layout, output};
use crate::error::{GvError, Result};
use crate::native::{
    ContextHandle, GraphHandle, GraphvizRuntime, NativeLibrary, discover_install_path,
    load_runtime,
};

pub const DEFAULT_LAYOUT_ENGINE: &str = layout::DEFAULT_ENGINE;
pub const DEFAULT_FORMAT: &str = output::DEFAULT_FORMAT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererState {
    /// Context open, no graph loaded
    Ready,
    /// Context open and a graph loaded
    GraphLoaded,
    /// All native resources released
    Disposed,
}

struct LoadedGraph {
    handle: GraphHandle,
    laid_out: bool,
}

/// Stateful wrapper around one Graphviz context.
///
/// Not `Send`: a renderer and its native handles belong to the thread that
/// created them. Use one renderer per thread for concurrent rendering.
pub struct GraphRenderer<R: GraphvizRuntime = NativeLibrary> {
    runtime: Arc<R>,
    context: Option<ContextHandle>,
    graph: Option<LoadedGraph>,
    layout_engine: String,
    cleanup_warning: Option<GvError>,
}

impl GraphRenderer<NativeLibrary> {
    /// Find an installed Graphviz and open a context on it.
    pub fn new() -> Result<Self> {
        let install_path = discover_install_path().ok_or(GvError::NativeRuntimeNotFound)?;
        Self::with_install_path(install_path)
    }

    /// Open a context on the Graphviz libraries in `install_path`.
    ///
    /// Fails immediately if the directory lacks a library or entry point.
    pub fn with_install_path(install_path: impl AsRef<Path>) -> Result<Self> {
        let runtime = load_runtime(install_path.as_ref())?;
        Self::with_runtime(runtime)
    }
}

impl<R: GraphvizRuntime> GraphRenderer<R> {
    pub fn with_runtime(runtime: Arc<R>) -> Result<Self> {
        let context = runtime.open_context().ok_or(GvError::ContextCreation)?;
        debug!("opened Graphviz context");

        Ok(Self {
            runtime,
            context: Some(context),
            graph: None,
            layout_engine: DEFAULT_LAYOUT_ENGINE.to_string(),
            cleanup_warning: None,
        })
    }

    pub fn state(&self) -> RendererState {
        match (&self.context, &self.graph) {
            (None, _) => RendererState::Disposed,
            (Some(_), None) => RendererState::Ready,
            (Some(_), Some(_)) => RendererState::GraphLoaded,
        }
    }

    pub fn layout_engine(&self) -> &str {
        &self.layout_engine
    }

    /// Engine used by the next render. Not validated until then.
    pub fn set_layout_engine(&mut self, engine: impl Into<String>) {
        self.layout_engine = engine.into();
    }

    /// Advisory failure left behind by the last render, if any
    pub fn take_cleanup_warning(&mut self) -> Option<GvError> {
        self.cleanup_warning.take()
    }

    /// Parse `description` and make it the loaded graph.
    ///
    /// A previously loaded graph is released first, so on failure the
    /// renderer is left in [`RendererState::Ready`].
    pub fn create_graph(&mut self, description: &str) -> Result<()> {
        if self.context.is_none() {
            return Err(GvError::RendererDisposed);
        }

        if let Err(err) = self.release_graph() {
            self.note_cleanup_failure(err);
        }

        let description =
            CString::new(description).map_err(|_| GvError::InvalidGraphDescription)?;
        let handle = self
            .runtime
            .read_graph(&description)
            .ok_or(GvError::InvalidGraphDescription)?;

        debug!("loaded graph");
        self.graph = Some(LoadedGraph {
            handle,
            laid_out: false,
        });
        Ok(())
    }

    /// Release the loaded graph, if any.
    pub fn dispose_graph(&mut self) -> Result<()> {
        if self.context.is_none() {
            return Err(GvError::RendererDisposed);
        }
        self.release_graph()
    }

    /// Run one layout/render cycle and let `read` look at the output while
    /// it is still in native memory.
    ///
    /// Returns `Ok(None)` when no graph is loaded. The native buffer is
    /// released whether or not `read` succeeds. A failure to free the layout
    /// afterwards does not discard the output; it is logged and kept for
    /// [`take_cleanup_warning`](Self::take_cleanup_warning).
    pub fn render_with<T, F>(&mut self, format: &str, read: F) -> Result<Option<T>>
    where
        F: FnOnce(&RenderBuffer<'_, R>) -> Result<T>,
    {
        let context = self.context.as_ref().ok_or(GvError::RendererDisposed)?;
        let Some(graph) = self.graph.as_mut() else {
            debug!("render requested without a loaded graph");
            return Ok(None);
        };

        let engine = CString::new(self.layout_engine.as_str()).map_err(|_| {
            GvError::InvalidArgument {
                what: "layout engine",
            }
        })?;
        let native_format = CString::new(format).map_err(|_| GvError::InvalidArgument {
            what: "output format",
        })?;
        let runtime = &*self.runtime;

        if graph.laid_out {
            // SAFETY: both handles are live and owned by this renderer.
            let status = unsafe { runtime.free_layout(context, &graph.handle) };
            graph.laid_out = false;
            if status != 0 {
                warn!(status, "failed to free stale layout");
                self.cleanup_warning = Some(GvError::LayoutReleaseFailed);
            }
        }

        debug!(engine = %self.layout_engine, "computing layout");
        // SAFETY: both handles are live and owned by this renderer.
        let status = unsafe { runtime.layout(context, &graph.handle, &engine) };
        if status != 0 {
            return Err(GvError::LayoutFailed {
                engine: self.layout_engine.clone(),
            });
        }
        graph.laid_out = true;

        debug!(format, "rendering");
        // SAFETY: the graph has just been laid out with this context.
        let raw = unsafe { runtime.render_data(context, &graph.handle, &native_format) }
            .map_err(|status| {
                debug!(status, "gvRenderData failed");
                GvError::RenderFailed {
                    format: format.to_string(),
                }
            })?;

        // SAFETY: `raw` was just returned by this runtime and is owned here.
        let buffer = unsafe { RenderBuffer::new(runtime, raw) };
        let result = read(&buffer);
        buffer.release();

        // SAFETY: both handles are live and owned by this renderer.
        let status = unsafe { runtime.free_layout(context, &graph.handle) };
        graph.laid_out = false;
        if status != 0 {
            warn!(status, "layout release failed after render");
            self.cleanup_warning = Some(GvError::LayoutReleaseFailed);
        }

        result.map(Some)
    }

    /// Render the loaded graph and copy the output bytes.
    pub fn render(&mut self, format: &str) -> Result<Option<Vec<u8>>> {
        self.render_with(format, |buffer| Ok(buffer.to_vec()))
    }

    /// Render the loaded graph and decode the output as a raster image.
    pub fn render_image(&mut self, format: &str) -> Result<Option<DynamicImage>> {
        self.render_with(format, |buffer| {
            Ok(ImageReader::new(buffer.reader())
                .with_guessed_format()?
                .decode()?)
        })
    }

    pub fn render_from_description(&mut self, description: &str, format: &str) -> Result<Vec<u8>> {
        self.create_graph(description)?;
        self.render(format)?.ok_or(GvError::InvalidGraphDescription)
    }

    /// Render `description` as PNG and decode it.
    pub fn image_from_description(&mut self, description: &str) -> Result<DynamicImage> {
        self.create_graph(description)?;
        self.render_image(DEFAULT_FORMAT)?
            .ok_or(GvError::InvalidGraphDescription)
    }

    pub fn render_from_file(&mut self, path: impl AsRef<Path>, format: &str) -> Result<Vec<u8>> {
        let description = std::fs::read_to_string(path)?;
        self.render_from_description(&description, format)
    }

    pub fn image_from_file(&mut self, path: impl AsRef<Path>) -> Result<DynamicImage> {
        let description = std::fs::read_to_string(path)?;
        self.image_from_description(&description)
    }

    /// Release the graph and the context. Safe to call more than once.
    ///
    /// Every resource is released even if an earlier release reports a
    /// failure; the first failure is returned.
    pub fn dispose(&mut self) -> Result<()> {
        if self.context.is_none() {
            return Ok(());
        }

        let graph_result = self.release_graph();
        let mut context_result = Ok(());
        if let Some(context) = self.context.take() {
            // SAFETY: the graph read through this context was closed above.
            let status = unsafe { self.runtime.close_context(context) };
            if status != 0 {
                context_result = Err(GvError::CleanupFailed {
                    resource: "context",
                });
            }
        }
        debug!("disposed Graphviz renderer");

        graph_result.and(context_result)
    }

    fn release_graph(&mut self) -> Result<()> {
        let Some(graph) = self.graph.take() else {
            return Ok(());
        };

        if graph.laid_out {
            if let Some(context) = self.context.as_ref() {
                // SAFETY: both handles are live and owned by this renderer.
                let status = unsafe { self.runtime.free_layout(context, &graph.handle) };
                if status != 0 {
                    self.note_cleanup_failure(GvError::LayoutReleaseFailed);
                }
            }
        }

        // SAFETY: the graph is owned by this renderer and its layout is gone.
        let status = unsafe { self.runtime.close_graph(graph.handle) };
        if status != 0 {
            return Err(GvError::CleanupFailed { resource: "graph" });
        }
        Ok(())
    }

    fn note_cleanup_failure(&mut self, err: GvError) {
        warn!(error = %err, "ignoring cleanup failure");
        self.cleanup_warning = Some(err);
    }
}

impl<R: GraphvizRuntime> Drop for GraphRenderer<R> {
    fn drop(&mut self) {
        if let Err(err) = self.dispose() {
            warn!(error = %err, "failed to release Graphviz resources on drop");
        }
    }
}

impl<R: GraphvizRuntime> std::fmt::Debug for GraphRenderer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphRenderer")
            .field("state", &self.state())
            .field("layout_engine", &self.layout_engine)
            .finish_non_exhaustive()
    }
}
