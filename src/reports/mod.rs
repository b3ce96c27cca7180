//! Report generation for command summaries
//!
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::ReportFormat;
use crate::error::GvError;

/// What a render produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub engine: String,
    pub format: String,
    pub bytes: usize,
    /// Pixel size when the output decodes as a raster image
    pub dimensions: Option<(u32, u32)>,
    /// `None` when written to standard output
    pub output: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Result of probing for a Graphviz install
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocateSummary {
    pub install_path: Option<PathBuf>,
    pub roots: Vec<PathBuf>,
    pub required_libraries: Vec<PathBuf>,
}

/// Common trait for all report generators
pub trait ReportGenerator {
    fn render_report(&self, summary: &RenderSummary) -> Result<String, GvError>;

    fn locate_report(&self, summary: &LocateSummary) -> Result<String, GvError>;
}

pub fn generator_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Human => Box::new(HumanReportGenerator::new()),
        ReportFormat::Json => Box::new(JsonReportGenerator::new()),
    }
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
