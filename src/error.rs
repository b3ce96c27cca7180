use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum GvError {
    #[error("Unable to find a Graphviz installation")]
    #[diagnostic(
        code(gvbind::runtime_not_found),
        help(
            "Install Graphviz, or construct the renderer with an explicit install path \
             (`--graphviz-dir` on the command line)"
        )
    )]
    NativeRuntimeNotFound,

    #[error("Failed to load native library '{path}'")]
    #[diagnostic(
        code(gvbind::library_load),
        help("Check that the directory contains the Graphviz cgraph and gvc shared libraries")
    )]
    LibraryLoad {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("Native library '{library}' does not export '{symbol}'")]
    #[diagnostic(
        code(gvbind::missing_symbol),
        help("The installed Graphviz is probably too old or incomplete")
    )]
    MissingSymbol {
        library: String,
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },

    #[error("Failed to extend the library search path with '{path}'")]
    #[diagnostic(
        code(gvbind::search_path),
        help("Directories containing the path separator cannot be added to the search path")
    )]
    SearchPath {
        path: PathBuf,
        #[source]
        source: std::env::JoinPathsError,
    },

    #[error("Graphviz refused to create a rendering context")]
    #[diagnostic(code(gvbind::context_creation))]
    ContextCreation,

    #[error("Invalid graph description")]
    #[diagnostic(
        code(gvbind::invalid_graph),
        help("The description could not be parsed as DOT; check braces and statement syntax")
    )]
    InvalidGraphDescription,

    #[error("Layout computation failed for engine \"{engine}\"")]
    #[diagnostic(
        code(gvbind::layout_failed),
        help("The graph is still loaded; retry with another layout engine")
    )]
    LayoutFailed { engine: String },

    #[error("Rendering to \"{format}\" produced no data")]
    #[diagnostic(
        code(gvbind::render_failed),
        help("Check that the output format is supported by the installed Graphviz plugins")
    )]
    RenderFailed { format: String },

    #[error("Layout release failed")]
    #[diagnostic(
        severity(Warning),
        code(gvbind::layout_release_failed),
        help("The rendered output is valid, but native layout memory may have leaked")
    )]
    LayoutReleaseFailed,

    #[error("Failed to release native {resource}")]
    #[diagnostic(
        severity(Warning),
        code(gvbind::cleanup_failed),
        help("Native memory may have leaked")
    )]
    CleanupFailed { resource: &'static str },

    #[error("Renderer has already been disposed")]
    #[diagnostic(
        code(gvbind::disposed),
        help("Create a new renderer; disposal is final")
    )]
    RendererDisposed,

    #[error("Invalid {what}: contains a NUL byte")]
    #[diagnostic(code(gvbind::invalid_argument))]
    InvalidArgument { what: &'static str },

    #[error("Failed to decode rendered image")]
    #[diagnostic(
        code(gvbind::image_decode),
        help("Only raster formats such as png can be decoded; use the byte-returning API for others")
    )]
    ImageDecode(#[from] image::ImageError),

    #[error(transparent)]
    #[diagnostic(code(gvbind::io_error))]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(gvbind::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(gvbind::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(gvbind::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

pub type Result<T, E = GvError> = std::result::Result<T, E>;
