//! JSON format report generation

use serde_json::json;

use super::{LocateSummary, RenderSummary, ReportGenerator};
use crate::error::GvError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn render_report(&self, summary: &RenderSummary) -> Result<String, GvError> {
        let report = json!({
            "engine": summary.engine,
            "format": summary.format,
            "bytes": summary.bytes,
            "width": summary.dimensions.map(|(width, _)| width),
            "height": summary.dimensions.map(|(_, height)| height),
            "output": summary.output,
            "warnings": summary.warnings,
        });

        serde_json::to_string_pretty(&report).map_err(GvError::Json)
    }

    fn locate_report(&self, summary: &LocateSummary) -> Result<String, GvError> {
        let report = json!({
            "found": summary.install_path.is_some(),
            "install_path": summary.install_path,
            "roots": summary.roots,
            "required_libraries": summary.required_libraries,
        });

        serde_json::to_string_pretty(&report).map_err(GvError::Json)
    }
}
