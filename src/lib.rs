//! # gvbind - Graphviz through its native libraries
//!
//! gvbind loads an installed Graphviz (`cgraph` and `gvc`) at runtime and
//! drives it through a small, ownership-checked facade. Parsing DOT, layout
//! and rasterization all happen inside Graphviz; this crate handles finding
//! the libraries, the lifetime of native handles and the hand-off of native
//! output buffers.
//!
//! ## Main Components
//!
//! - **native**: locates a Graphviz install, extends the library search path
//!   and binds the C entry points
//! - **renderer**: [`GraphRenderer`](renderer::GraphRenderer), the stateful
//!   facade over one Graphviz context, and
//!   [`RenderBuffer`](renderer::RenderBuffer), the owned output buffer
//! - **cli / commands / executors**: the `gvbind` command-line tool
//!
//! ## Usage
//!
//! ### Rendering a description to PNG
//!
//! ```no_run
//! use gvbind::renderer::GraphRenderer;
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! // Probe the standard install directories for Graphviz
//! let mut renderer = GraphRenderer::new()?;
//!
//! let png = renderer.render_from_description("digraph{a -> b; b -> c; c -> a;}", "png")?;
//! std::fs::write("triangle.png", png).into_diagnostic()?;
//!
//! // Deterministic release; dropping the renderer would do the same
//! renderer.dispose()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Explicit install path, other engines and formats
//!
//! ```no_run
//! use gvbind::renderer::GraphRenderer;
//!
//! # fn main() -> miette::Result<()> {
//! let mut renderer = GraphRenderer::with_install_path("/opt/graphviz/lib")?;
//! renderer.set_layout_engine("neato");
//!
//! renderer.create_graph("graph{x -- y; y -- z; z -- x}")?;
//! let svg = renderer.render("svg")?.unwrap_or_default();
//! let image = renderer.render_image("png")?;
//!
//! println!("{} bytes of svg, image: {:?}", svg.len(), image.map(|i| i.width()));
//! if let Some(warning) = renderer.take_cleanup_warning() {
//!     eprintln!("warning: {warning}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Threading
//!
//! A renderer owns raw native handles and is neither `Send` nor `Sync`.
//! Create one renderer per thread, and construct the first one before
//! spawning threads: loading Graphviz edits the process environment.

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod native;
pub mod renderer;
pub mod reports;

pub use common::ConfigBuilder;
pub use error::GvError;
pub use renderer::{GraphRenderer, RenderBuffer, RendererState};

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    use crate::constants::logging::{DEFAULT_FILTER, FILTER_ENV};

    let filter =
        EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    init_logging();

    let cli = Cli::parse();
    execute_command(cli.command)
}
