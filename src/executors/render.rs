//! Render command executor

use std::fs;
use std::io::{self, BufRead, Read, Seek, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::info;

use crate::config::{GraphSource, RenderConfig};
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::renderer::GraphRenderer;
use crate::reports::{RenderSummary, generator_for};

pub struct RenderExecutor;

fn read_description(source: &GraphSource) -> Result<String> {
    match source {
        GraphSource::Inline(text) => Ok(text.clone()),
        GraphSource::File(path) => fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read graph file '{}'", path.display())),
        GraphSource::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .into_diagnostic()
                .wrap_err("Failed to read graph description from stdin")?;
            Ok(text)
        }
    }
}

/// Decoded pixel size when the output is a raster image
///
/// Only the image header is read.
fn raster_dimensions<R: BufRead + Seek>(reader: R) -> Option<(u32, u32)> {
    image::ImageReader::new(reader)
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

impl CommandExecutor for RenderExecutor {
    type Config = RenderConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let description = read_description(&config.source)?;

        let mut progress = ProgressReporter::for_terminal();
        if let Some(p) = progress.as_mut() {
            p.start_loading();
        }

        let mut renderer = match &config.graphviz_dir {
            Some(dir) => GraphRenderer::with_install_path(dir).wrap_err_with(|| {
                format!("Failed to load Graphviz from '{}'", dir.display())
            })?,
            None => GraphRenderer::new().wrap_err("Failed to load Graphviz")?,
        };
        renderer.set_layout_engine(config.engine.as_str());

        if let Some(p) = progress.as_mut() {
            p.start_render(&config.engine, &config.format);
        }

        renderer
            .create_graph(&description)
            .wrap_err("Graphviz rejected the graph description")?;
        let rendered = renderer
            .render_with(&config.format, |buffer| {
                Ok((buffer.to_vec(), raster_dimensions(buffer.reader())))
            })
            .wrap_err("Failed to render graph")?;

        if let Some(mut p) = progress.take() {
            p.finish();
        }

        let Some((bytes, dimensions)) = rendered else {
            eprintln!("{} Nothing to render", style("ℹ").blue());
            return Ok(());
        };

        let mut warnings = Vec::new();
        if let Some(warning) = renderer.take_cleanup_warning() {
            warnings.push(warning.to_string());
        }
        if let Err(err) = renderer.dispose() {
            warnings.push(err.to_string());
        }

        match &config.output {
            Some(path) => fs::write(path, &bytes)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write output file '{}'", path.display()))?,
            None => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(&bytes)
                    .and_then(|_| stdout.flush())
                    .into_diagnostic()
                    .wrap_err("Failed to write output to stdout")?;
            }
        }
        info!(bytes = bytes.len(), format = %config.format, "rendered graph");

        let summary = RenderSummary {
            engine: config.engine,
            format: config.format,
            bytes: bytes.len(),
            dimensions,
            output: config.output,
            warnings,
        };
        let report = generator_for(config.report)
            .render_report(&summary)
            .wrap_err("Failed to generate report")?;

        // Rendered bytes own stdout when no output file was given
        if summary.output.is_some() {
            print!("{report}");
            if !report.ends_with('\n') {
                println!();
            }
        } else {
            eprintln!("{}", report.trim_end());
        }

        Ok(())
    }
}
