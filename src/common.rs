//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::config::GraphSource;

/// Where the graph description comes from
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// DOT file to render (reads standard input when omitted)
    #[arg(value_name = "FILE", conflicts_with = "dot")]
    pub file: Option<PathBuf>,

    /// Inline DOT description
    #[arg(long, value_name = "DOT", env = "GVBIND_DOT")]
    pub dot: Option<String>,
}

/// Layout and output arguments
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Layout engine (dot, neato, fdp, sfdp, circo, twopi, ...)
    #[arg(
        short,
        long,
        default_value = crate::constants::layout::DEFAULT_ENGINE,
        env = "GVBIND_ENGINE"
    )]
    pub engine: String,

    /// Output format understood by Graphviz (png, svg, pdf, ...)
    #[arg(
        short = 'T',
        long,
        default_value = crate::constants::output::DEFAULT_FORMAT,
        env = "GVBIND_FORMAT"
    )]
    pub format: String,

    /// Output file (stdout if not specified)
    #[arg(short, long, env = "GVBIND_OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Where to load Graphviz from
#[derive(Args, Debug, Clone)]
pub struct RuntimeArgs {
    /// Directory holding the Graphviz shared libraries (auto-detected when
    /// omitted)
    #[arg(long, value_name = "DIR", env = "GVBIND_GRAPHVIZ_DIR")]
    pub graphviz_dir: Option<PathBuf>,
}

/// Summary report format
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Report format
    #[arg(long, value_enum, default_value = crate::constants::output::DEFAULT_REPORT, env = "GVBIND_REPORT")]
    pub report: crate::cli::ReportFormat,
}

impl InputArgs {
    /// Resolve the input, falling back to standard input
    pub fn source(&self) -> GraphSource {
        match (&self.file, &self.dot) {
            (_, Some(dot)) => GraphSource::Inline(dot.clone()),
            (Some(file), None) => GraphSource::File(file.clone()),
            (None, None) => GraphSource::Stdin,
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::GvError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::GvError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::GvError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
