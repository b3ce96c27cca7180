//! Render and demo command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{GraphSource, RenderConfig};
use crate::constants::{demo, layout, output};
use crate::error::GvError;

impl FromCommand for RenderConfig {
    fn from_command(command: Commands) -> Result<Self, GvError> {
        match command {
            Commands::Render {
                input,
                render,
                runtime,
                report,
            } => RenderConfig::builder()
                .with_source(input.source())
                .with_engine(render.engine)
                .with_format(render.format)
                .with_output(render.output)
                .with_graphviz_dir(runtime.graphviz_dir)
                .with_report(report.report)
                .build(),
            Commands::Demo {
                output: path,
                runtime,
                report,
            } => RenderConfig::builder()
                .with_source(GraphSource::Inline(demo::TRIANGLE.to_string()))
                .with_engine(layout::DEFAULT_ENGINE.to_string())
                .with_format(output::DEFAULT_FORMAT.to_string())
                .with_output(Some(path))
                .with_graphviz_dir(runtime.graphviz_dir)
                .with_report(report.report)
                .build(),
            _ => Err(GvError::ConfigurationError {
                message: "Invalid command type for RenderConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderConfig);

/// Execute the render or demo command
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderConfig::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}
