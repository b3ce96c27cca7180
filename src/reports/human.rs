//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{LocateSummary, RenderSummary, ReportGenerator};
use crate::error::GvError;
use crate::utils::string::pluralize;

#[derive(Default)]
pub struct HumanReportGenerator;

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn render_report(&self, summary: &RenderSummary) -> Result<String, GvError> {
        let mut output = String::new();

        write!(
            output,
            "{} Rendered {} {} of {} with the {} engine",
            style("✓").green().bold(),
            style(summary.bytes).yellow().bold(),
            pluralize("byte", summary.bytes),
            style(&summary.format).bold(),
            style(&summary.engine).cyan()
        )?;
        if let Some((width, height)) = summary.dimensions {
            write!(output, " ({width}x{height} px)")?;
        }
        writeln!(output)?;

        if let Some(path) = &summary.output {
            writeln!(
                output,
                "  {} Written to {}",
                style("→").dim(),
                style(path.display()).bold()
            )?;
        }

        for warning in &summary.warnings {
            writeln!(output, "  {} {}", style("⚠").yellow(), warning)?;
        }

        Ok(output)
    }

    fn locate_report(&self, summary: &LocateSummary) -> Result<String, GvError> {
        let mut output = String::new();

        match &summary.install_path {
            Some(path) => writeln!(
                output,
                "{} Graphviz libraries found in {}",
                style("✓").green().bold(),
                style(path.display()).bold()
            )?,
            None => writeln!(
                output,
                "{} No Graphviz install found",
                style("✗").red().bold()
            )?,
        }

        writeln!(output, "  {} Searched:", style("🔍").cyan())?;
        for root in &summary.roots {
            writeln!(output, "    {} {}", style("•").dim(), root.display())?;
        }

        writeln!(output, "  {} Required libraries:", style("📦").blue())?;
        for library in &summary.required_libraries {
            writeln!(output, "    {} {}", style("•").dim(), library.display())?;
        }

        Ok(output)
    }
}
