//! Locate command configuration

use crate::cli::ReportFormat;

#[derive(Debug, Clone)]
pub struct LocateConfig {
    pub report: ReportFormat,
}

impl LocateConfig {
    pub fn builder() -> LocateConfigBuilder {
        LocateConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct LocateConfigBuilder {
    report: Option<ReportFormat>,
}

impl LocateConfigBuilder {
    pub fn with_report(mut self, report: ReportFormat) -> Self {
        self.report = Some(report);
        self
    }
}

impl crate::common::ConfigBuilder for LocateConfigBuilder {
    type Config = LocateConfig;

    fn build(self) -> Result<Self::Config, crate::error::GvError> {
        Ok(LocateConfig {
            report: self.report.ok_or_else(|| {
                crate::error::GvError::ConfigurationError {
                    message: "Missing required field: report".to_string(),
                }
            })?,
        })
    }
}
