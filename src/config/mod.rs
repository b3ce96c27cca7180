//! # Configuration Module
//!
//! Configuration structures for the gvbind commands, each with a builder.
//!
//! - **RenderConfig**: configuration for `render` and `demo`
//! - **LocateConfig**: configuration for `locate`
//!
//! ## Example
//!
//! ```
//! use gvbind::cli::ReportFormat;
//! use gvbind::common::ConfigBuilder;
//! use gvbind::config::{GraphSource, RenderConfig};
//!
//! let config = RenderConfig::builder()
//!     .with_source(GraphSource::Inline("digraph{a -> b}".to_string()))
//!     .with_engine("dot".to_string())
//!     .with_format("svg".to_string())
//!     .with_output(None)
//!     .with_graphviz_dir(None)
//!     .with_report(ReportFormat::Json)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.format, "svg");
//! ```

pub mod locate;
pub mod render;

pub use locate::LocateConfig;
pub use render::{GraphSource, RenderConfig};
