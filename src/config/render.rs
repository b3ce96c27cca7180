//! Render command configuration

use std::path::PathBuf;

use crate::cli::ReportFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    File(PathBuf),
    Inline(String),
    Stdin,
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub source: GraphSource,
    pub engine: String,
    pub format: String,
    pub output: Option<PathBuf>,
    pub graphviz_dir: Option<PathBuf>,
    pub report: ReportFormat,
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct RenderConfigBuilder {
    source: Option<GraphSource>,
    engine: Option<String>,
    format: Option<String>,
    output: Option<Option<PathBuf>>,
    graphviz_dir: Option<Option<PathBuf>>,
    report: Option<ReportFormat>,
}

impl RenderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: GraphSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_engine(mut self, engine: String) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn with_format(mut self, format: String) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_graphviz_dir(mut self, graphviz_dir: Option<PathBuf>) -> Self {
        self.graphviz_dir = Some(graphviz_dir);
        self
    }

    pub fn with_report(mut self, report: ReportFormat) -> Self {
        self.report = Some(report);
        self
    }
}

fn missing(field: &str) -> crate::error::GvError {
    crate::error::GvError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

impl crate::common::ConfigBuilder for RenderConfigBuilder {
    type Config = RenderConfig;

    fn build(self) -> Result<Self::Config, crate::error::GvError> {
        Ok(RenderConfig {
            source: self.source.ok_or_else(|| missing("source"))?,
            engine: self.engine.ok_or_else(|| missing("engine"))?,
            format: self.format.ok_or_else(|| missing("format"))?,
            output: self.output.ok_or_else(|| missing("output"))?,
            graphviz_dir: self.graphviz_dir.ok_or_else(|| missing("graphviz_dir"))?,
            report: self.report.ok_or_else(|| missing("report"))?,
        })
    }
}
